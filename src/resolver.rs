//! City name -> reading, through either the demo table or the live API

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::OpenWeatherClient;
use crate::config::{LookupConfig, LookupMode};
use crate::demo::DemoResolver;
use crate::error::LookupError;
use crate::state::WeatherReading;

#[async_trait]
pub trait WeatherResolver: Send + Sync {
    /// `city` is already trimmed and non-empty.
    async fn resolve(&self, city: &str) -> Result<WeatherReading, LookupError>;

    fn mode(&self) -> LookupMode;
}

/// Pick the resolver the configuration calls for.
pub fn resolver_for(config: &LookupConfig) -> Result<Arc<dyn WeatherResolver>, LookupError> {
    match config.credential() {
        Some(key) => Ok(Arc::new(OpenWeatherClient::new(config, key)?)),
        None => Ok(Arc::new(DemoResolver::from_config(config))),
    }
}
