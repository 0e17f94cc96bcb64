//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve current weather for a trimmed, non-empty city name
    ResolveWeather { city: String },
}
