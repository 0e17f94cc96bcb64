//! Built-in demo data used when no credential is configured

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::{LookupConfig, LookupMode};
use crate::error::LookupError;
use crate::resolver::WeatherResolver;
use crate::state::WeatherReading;

struct DemoCity {
    name: &'static str,
    country: &'static str,
    temperature: f64,
    description: &'static str,
    category: &'static str,
    humidity: u32,
    wind_speed: f64,
}

const DEMO_CITIES: [DemoCity; 3] = [
    DemoCity {
        name: "London",
        country: "GB",
        temperature: 14.2,
        description: "light rain",
        category: "Rain",
        humidity: 82,
        wind_speed: 4.1,
    },
    DemoCity {
        name: "New York",
        country: "US",
        temperature: 22.5,
        description: "clear sky",
        category: "Clear",
        humidity: 56,
        wind_speed: 3.6,
    },
    DemoCity {
        name: "Tokyo",
        country: "JP",
        temperature: 18.7,
        description: "broken clouds",
        category: "Clouds",
        humidity: 68,
        wind_speed: 2.4,
    },
];

impl DemoCity {
    fn reading(&self) -> WeatherReading {
        WeatherReading {
            name: self.name.to_string(),
            country: Some(self.country.to_string()),
            temperature: Some(self.temperature),
            description: self.description.to_string(),
            main_category: Some(self.category.to_string()),
            icon_code: None,
            humidity: Some(self.humidity),
            wind_speed: Some(self.wind_speed),
        }
    }
}

/// Case-insensitive exact lookup in the demo table
pub fn demo_reading(city: &str) -> Option<WeatherReading> {
    let city = city.trim();
    DEMO_CITIES
        .iter()
        .find(|demo| demo.name.eq_ignore_ascii_case(city))
        .map(DemoCity::reading)
}

/// Names the demo table knows, for hints
pub fn demo_city_names() -> impl Iterator<Item = &'static str> {
    DEMO_CITIES.iter().map(|demo| demo.name)
}

#[derive(Debug, Clone)]
pub struct DemoResolver {
    delay: Duration,
}

impl DemoResolver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(Duration::from_millis(config.mock_delay_ms))
    }
}

#[async_trait]
impl WeatherResolver for DemoResolver {
    async fn resolve(&self, city: &str) -> Result<WeatherReading, LookupError> {
        info!(city, "looking up demo weather");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match demo_reading(city) {
            Some(reading) => {
                debug!(city, "demo city found");
                Ok(reading)
            }
            None => {
                warn!(city, "city not in demo data");
                Err(LookupError::NotInDemoData)
            }
        }
    }

    fn mode(&self) -> LookupMode {
        LookupMode::Mock
    }
}
