pub mod result_panel;
pub mod search_bar;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use result_panel::{ResultPanel, ResultPanelProps};
pub use search_bar::{SearchBar, SearchBarProps, BUTTON_LABEL};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
