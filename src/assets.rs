//! Icon and background selection
//!
//! Both tables match lowercase substrings of the condition key in order and
//! stop at the first hit, so rule order is part of the behaviour.

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{LookupConfig, LookupMode};
use crate::state::WeatherReading;

// ============================================================================
// Icons
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LocalIcon {
    Drizzle,
    Rain,
    Cloudy,
    Clear,
    Mist,
    Wind,
    Humidity,
    Rain1,
    Rain2,
    Search,
}

impl LocalIcon {
    pub fn path(self) -> &'static str {
        match self {
            LocalIcon::Drizzle => "images/drizzle.png",
            LocalIcon::Rain => "images/rain.jpg",
            LocalIcon::Cloudy => "images/cloudy.jpg",
            LocalIcon::Clear => "images/clear.jpg",
            LocalIcon::Mist => "images/mist.jpg",
            LocalIcon::Wind => "images/wind.png",
            LocalIcon::Humidity => "images/humidity.png",
            LocalIcon::Rain1 => "images/rain1.png",
            LocalIcon::Rain2 => "images/rain2.png",
            LocalIcon::Search => "images/search1.png",
        }
    }

    /// Terminal stand-in for the image
    pub fn glyph(self) -> &'static str {
        match self {
            LocalIcon::Drizzle => "\u{1f326}\u{fe0f}",
            LocalIcon::Rain | LocalIcon::Rain1 | LocalIcon::Rain2 => "\u{1f327}\u{fe0f}",
            LocalIcon::Cloudy => "\u{2601}\u{fe0f}",
            LocalIcon::Clear => "\u{2600}\u{fe0f}",
            LocalIcon::Mist => "\u{1f32b}\u{fe0f}",
            LocalIcon::Wind => "\u{1f32c}\u{fe0f}",
            LocalIcon::Humidity => "\u{1f4a7}",
            LocalIcon::Search => "\u{1f50d}",
        }
    }
}

const ICON_RULES: &[(&[&str], LocalIcon)] = &[
    (&["drizzle"], LocalIcon::Drizzle),
    (&["rain"], LocalIcon::Rain),
    (&["cloud"], LocalIcon::Cloudy),
    (&["clear"], LocalIcon::Clear),
    (&["mist", "fog", "haze"], LocalIcon::Mist),
    (&["wind"], LocalIcon::Wind),
    (&["humidity"], LocalIcon::Humidity),
    // Shadowed by "rain" above; kept in table order.
    (&["rain1"], LocalIcon::Rain1),
    (&["rain2"], LocalIcon::Rain2),
];

pub fn icon_for(key: &str) -> LocalIcon {
    first_match(key, ICON_RULES).unwrap_or(LocalIcon::Search)
}

/// Where the icon image comes from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum IconSource {
    Remote(String),
    Local(LocalIcon),
}

impl IconSource {
    pub fn location(&self) -> &str {
        match self {
            IconSource::Remote(url) => url,
            IconSource::Local(icon) => icon.path(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            // Provider art cannot be drawn in a terminal; show a neutral mark.
            IconSource::Remote(_) => "\u{1f310}",
            IconSource::Local(icon) => icon.glyph(),
        }
    }
}

/// Provider icon only in live mode and only when the reading carries a code.
pub fn icon_source(reading: &WeatherReading, mode: LookupMode, config: &LookupConfig) -> IconSource {
    match reading.icon_code.as_deref() {
        Some(code) if !code.is_empty() && mode.is_live() => {
            IconSource::Remote(config.icon_url(code))
        }
        _ => IconSource::Local(icon_for(reading.condition_key())),
    }
}

// ============================================================================
// Backgrounds
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Background {
    Rain,
    Cloudy,
    Clear,
    Mist,
    Default,
}

impl Background {
    pub fn path(self) -> &'static str {
        match self {
            Background::Rain => "images/rain2.png",
            Background::Cloudy => "images/cloudy.jpg",
            Background::Clear => "images/clear.jpg",
            Background::Mist => "images/mist.jpg",
            Background::Default => "images/vuuu.jpg",
        }
    }

    /// Panel tint used in place of the image
    pub fn tint(self) -> Color {
        match self {
            Background::Rain => Color::Rgb(30, 40, 60),
            Background::Cloudy => Color::Rgb(45, 48, 55),
            Background::Clear => Color::Rgb(25, 55, 85),
            Background::Mist => Color::Rgb(55, 55, 60),
            Background::Default => Color::Rgb(35, 35, 45),
        }
    }
}

const BACKGROUND_RULES: &[(&[&str], Background)] = &[
    (&["rain", "drizzle"], Background::Rain),
    (&["cloud"], Background::Cloudy),
    (&["clear"], Background::Clear),
    (&["mist", "fog", "haze"], Background::Mist),
    (&["wind"], Background::Default),
];

pub fn background_for(key: &str) -> Background {
    first_match(key, BACKGROUND_RULES).unwrap_or(Background::Default)
}

fn first_match<T: Copy>(key: &str, rules: &[(&[&str], T)]) -> Option<T> {
    if key.is_empty() {
        return None;
    }
    let key = key.to_lowercase();
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| key.contains(needle)))
        .map(|(_, value)| *value)
}
