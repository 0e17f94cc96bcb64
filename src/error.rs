//! Lookup errors
//!
//! Every variant ends up as plain text on the single error surface, so the
//! `Display` strings are what the user reads.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("Please enter a city name")]
    EmptyInput,
    #[error("City not found in demo data")]
    NotInDemoData,
    #[error("City not found")]
    NotFound,
    #[error("{0}")]
    Request(String),
    #[error("response parse error: {0}")]
    Parse(String),
    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl LookupError {
    /// True for the "no such city" family, as opposed to transport trouble.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotInDemoData | LookupError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(LookupError::EmptyInput.to_string(), "Please enter a city name");
        assert_eq!(
            LookupError::NotInDemoData.to_string(),
            "City not found in demo data"
        );
        assert_eq!(LookupError::NotFound.to_string(), "City not found");
        assert_eq!(
            LookupError::Request("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_not_found_family() {
        assert!(LookupError::NotFound.is_not_found());
        assert!(LookupError::NotInDemoData.is_not_found());
        assert!(!LookupError::Request("timeout".into()).is_not_found());
    }
}
