//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{LookupConfig, LookupMode};
use crate::page::PageState;

/// Current conditions for one city, built per lookup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReading {
    pub name: String,
    pub country: Option<String>,
    /// Degrees Celsius
    pub temperature: Option<f64>,
    pub description: String,
    /// Coarse label such as "Rain" or "Clear"
    pub main_category: Option<String>,
    /// Provider icon id, e.g. "10d"
    pub icon_code: Option<String>,
    /// Percent
    pub humidity: Option<u32>,
    /// Metres per second
    pub wind_speed: Option<f64>,
}

impl WeatherReading {
    /// "Name, CC", or just the name when the country is missing
    pub fn display_name(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    /// Category when known, otherwise the free-text description
    pub fn condition_key(&self) -> &str {
        match self.main_category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => &self.description,
        }
    }
}

/// Which part of the search bar has keyboard focus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SearchFocus {
    #[default]
    Input,
    Button,
}

impl SearchFocus {
    pub fn next(self) -> Self {
        match self {
            SearchFocus::Input => SearchFocus::Button,
            SearchFocus::Button => SearchFocus::Input,
        }
    }
}

/// Spinner timing for the loading indicator.
pub const LOADING_ANIM_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Search input contents, untrimmed
    #[debug(section = "Search", label = "Input")]
    pub input: String,

    #[debug(section = "Search", label = "Focus", debug_fmt)]
    pub focus: SearchFocus,

    /// Mock or live, fixed at startup from the extracted credential
    #[debug(section = "Lookup", label = "Mode", debug_fmt)]
    pub mode: LookupMode,

    #[debug(skip)]
    pub config: LookupConfig,

    /// Rendered page elements
    #[debug(section = "Page", label = "Elements", debug_fmt)]
    pub page: PageState,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(config: LookupConfig) -> Self {
        Self {
            input: String::new(),
            focus: SearchFocus::default(),
            mode: config.mode(),
            config,
            page: PageState::default(),
            tick_count: 0,
        }
    }

    /// Start with text already in the search input
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LookupConfig::default())
    }
}
