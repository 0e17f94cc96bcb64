//! Actions for the lookup flow

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReading;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed
    SearchInputChange(String),

    /// Enter in the input or activation of the Search button; carries the raw input
    SearchSubmit(String),

    // ===== Weather category =====
    /// Result: resolver produced a reading
    WeatherDidLoad(WeatherReading),

    /// Result: lookup failed (not found or request error)
    WeatherDidError(String),

    // ===== UI category =====
    /// Move focus between the input and the Search button
    UiFocusNext,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
