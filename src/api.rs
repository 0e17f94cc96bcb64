//! OpenWeatherMap current-weather client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::config::{LookupConfig, LookupMode};
use crate::error::LookupError;
use crate::resolver::WeatherResolver;
use crate::state::WeatherReading;

// ============================================================================
// Response envelope
// ============================================================================

/// Every field is optional: a sparse body still yields a reading.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrentWeatherResponse {
    name: Option<String>,
    sys: Option<SysSection>,
    main: Option<MainSection>,
    weather: Option<Vec<ConditionEntry>>,
    wind: Option<WindSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SysSection {
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MainSection {
    temp: Option<f64>,
    humidity: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConditionEntry {
    main: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WindSection {
    speed: Option<f64>,
}

impl From<CurrentWeatherResponse> for WeatherReading {
    fn from(response: CurrentWeatherResponse) -> Self {
        let condition = response
            .weather
            .and_then(|entries| entries.into_iter().next())
            .unwrap_or_default();
        let (temperature, humidity) = response
            .main
            .map(|main| (main.temp, main.humidity))
            .unwrap_or_default();

        WeatherReading {
            name: response.name.unwrap_or_default(),
            country: response.sys.and_then(|sys| sys.country),
            temperature,
            description: condition.description.unwrap_or_default(),
            main_category: condition.main,
            icon_code: condition.icon,
            humidity,
            wind_speed: response.wind.and_then(|wind| wind.speed),
        }
    }
}

/// Decode a current-weather body into a reading
pub fn parse_reading(body: &str) -> Result<WeatherReading, LookupError> {
    serde_json::from_str::<CurrentWeatherResponse>(body)
        .map(WeatherReading::from)
        .map_err(|e| LookupError::Parse(e.to_string()))
}

// ============================================================================
// Client
// ============================================================================

pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// `api_key` must be the extracted key, not the raw configured string.
    pub fn new(config: &LookupConfig, api_key: String) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn request_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl WeatherResolver for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn resolve(&self, city: &str) -> Result<WeatherReading, LookupError> {
        info!("fetching current weather");
        let response = self
            .client
            .get(self.request_url(city))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "weather request failed");
                LookupError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "weather lookup rejected");
            return Err(LookupError::NotFound);
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;
        let reading = parse_reading(&body)?;
        debug!(name = %reading.name, "weather data fetched");
        Ok(reading)
    }

    fn mode(&self) -> LookupMode {
        LookupMode::Live
    }
}
