//! Lookup configuration and credential handling

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
pub const DEFAULT_MOCK_DELAY_MS: u64 = 600;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which resolver answers lookups
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LookupMode {
    /// Built-in demo table, no network
    #[default]
    Mock,
    /// OpenWeatherMap with an extracted credential
    Live,
}

impl LookupMode {
    pub fn is_live(self) -> bool {
        self == LookupMode::Live
    }

    pub fn label(self) -> &'static str {
        match self {
            LookupMode::Mock => "demo data",
            LookupMode::Live => "OpenWeatherMap",
        }
    }
}

/// Extract the provider key from a configured credential.
///
/// Accepts either a bare key or a pasted request URL carrying `appid=`.
/// Returns `None` for a blank credential.
pub fn extract_api_key(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for (idx, _) in raw.match_indices("appid=") {
        let preceded_by_delim = raw[..idx].ends_with('?') || raw[..idx].ends_with('&');
        if !preceded_by_delim {
            continue;
        }
        let key: String = raw[idx + "appid=".len()..]
            .chars()
            .take_while(char::is_ascii_alphanumeric)
            .collect();
        if !key.is_empty() {
            return Some(key);
        }
    }

    Some(raw.to_string())
}

/// Injectable configuration for resolvers and the renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LookupConfig {
    /// Credential as configured: a bare key or a full request URL
    pub api_key: Option<String>,
    pub base_url: String,
    pub icon_base_url: String,
    pub mock_delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            mock_delay_ms: DEFAULT_MOCK_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// The extracted key, if any
    pub fn credential(&self) -> Option<String> {
        self.api_key.as_deref().and_then(extract_api_key)
    }

    /// Mode follows the extracted key, never the raw string.
    pub fn mode(&self) -> LookupMode {
        match self.credential() {
            Some(_) => LookupMode::Live,
            None => LookupMode::Mock,
        }
    }

    pub fn icon_url(&self, code: &str) -> String {
        format!("{}/{}@2x.png", self.icon_base_url.trim_end_matches('/'), code)
    }
}
