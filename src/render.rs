//! Renderer - turns a reading or an error into page element writes

use crate::assets::{background_for, icon_source};
use crate::config::{LookupConfig, LookupMode};
use crate::page::{RenderPort, TextField};
use crate::state::WeatherReading;

const PLACEHOLDER: &str = "-";

/// Round half towards positive infinity (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(t) if t.is_finite() => format!("{}°C", round_half_up(t)),
        _ => format!("{PLACEHOLDER}°C"),
    }
}

pub fn format_humidity(humidity: Option<u32>) -> String {
    match humidity {
        Some(h) => format!("Humidity: {h}%"),
        None => format!("Humidity: {PLACEHOLDER}%"),
    }
}

pub fn format_wind(speed: Option<f64>) -> String {
    match speed {
        Some(s) => format!("Wind: {s} m/s"),
        None => format!("Wind: {PLACEHOLDER} m/s"),
    }
}

/// Success path: stop loading, clear the error, fill and reveal the panel.
pub fn show_weather<P: RenderPort + ?Sized>(
    port: &mut P,
    reading: &WeatherReading,
    mode: LookupMode,
    config: &LookupConfig,
) {
    port.set_loading(false);
    port.set_error_text("");
    port.set_result_visible(true);

    port.set_text(TextField::CityName, reading.display_name());
    port.set_text(TextField::Temperature, format_temperature(reading.temperature));
    port.set_text(TextField::Description, reading.description.clone());
    port.set_text(TextField::Humidity, format_humidity(reading.humidity));
    port.set_text(TextField::Wind, format_wind(reading.wind_speed));

    let alt = if reading.description.is_empty() {
        "weather".to_string()
    } else {
        reading.description.clone()
    };
    port.set_icon(icon_source(reading, mode, config), alt);
    port.set_background(background_for(reading.condition_key()));
}

/// Failure path: stop loading, hide the panel, show the message.
pub fn show_error<P: RenderPort + ?Sized>(port: &mut P, message: &str) {
    port.set_loading(false);
    port.set_result_visible(false);
    port.set_error_text(message);
}
