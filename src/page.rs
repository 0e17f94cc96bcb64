//! Page elements and the port the renderer writes through

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::assets::{Background, IconSource};

/// Text slots of the result panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    CityName,
    Temperature,
    Description,
    Humidity,
    Wind,
}

/// Output surface for the renderer.
///
/// Kept element-level so rendering decisions stay in `render` and can be
/// exercised against any implementation.
pub trait RenderPort {
    fn set_loading(&mut self, on: bool);
    fn set_result_visible(&mut self, visible: bool);
    fn set_error_text(&mut self, text: &str);
    fn set_text(&mut self, field: TextField, text: String);
    fn set_icon(&mut self, icon: IconSource, alt: String);

    /// The background element is optional; ports without one ignore this.
    fn set_background(&mut self, _background: Background) {}
}

/// In-memory page drawn by the TUI components
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PageState {
    pub loading: bool,
    pub result_visible: bool,
    pub error_text: String,
    pub city_name: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub icon: Option<IconSource>,
    pub icon_alt: String,
    /// `None` until the first successful render reveals it
    pub background: Option<Background>,
}

impl PageState {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::CityName => &self.city_name,
            TextField::Temperature => &self.temperature,
            TextField::Description => &self.description,
            TextField::Humidity => &self.humidity,
            TextField::Wind => &self.wind,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_text.is_empty()
    }
}

impl RenderPort for PageState {
    fn set_loading(&mut self, on: bool) {
        self.loading = on;
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_text = text.to_string();
    }

    fn set_text(&mut self, field: TextField, text: String) {
        let slot = match field {
            TextField::CityName => &mut self.city_name,
            TextField::Temperature => &mut self.temperature,
            TextField::Description => &mut self.description,
            TextField::Humidity => &mut self.humidity,
            TextField::Wind => &mut self.wind,
        };
        *slot = text;
    }

    fn set_icon(&mut self, icon: IconSource, alt: String) {
        self.icon = Some(icon);
        self.icon_alt = alt;
    }

    fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }
}
