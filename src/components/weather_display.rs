use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ResultPanel, ResultPanelProps, SearchBar, SearchBarProps};
use crate::action::Action;
use crate::config::LookupMode;
use crate::demo::demo_city_names;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole page: search bar, messages, result panel, key hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn search_props<'a>(state: &'a AppState, is_focused: bool) -> SearchBarProps<'a> {
        SearchBarProps {
            value: &state.input,
            focus: state.focus,
            is_focused,
            on_change: Action::SearchInputChange,
            on_submit: Action::SearchSubmit,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                return vec![Action::Quit];
            }
        }

        self.search
            .handle_event(event, Self::search_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let page = &state.page;

        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Error
            Constraint::Length(1), // Loading
            Constraint::Min(1),    // Result panel
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            Self::search_props(state, props.is_focused),
        );

        if page.has_error() {
            let line = Line::from(vec![
                Span::raw(format!("{ERROR_ICON} ")),
                Span::styled(page.error_text.clone(), Style::default().fg(Color::Red).bold()),
            ])
            .centered();
            frame.render_widget(Paragraph::new(line), chunks[1]);
        }

        if page.loading {
            let line = Line::from(Span::styled(
                format!("{} Loading...", state.spinner_frame()),
                Style::default().fg(Color::Cyan),
            ))
            .centered();
            frame.render_widget(Paragraph::new(line), chunks[2]);
        }

        if page.result_visible {
            ResultPanel.render(frame, chunks[3], ResultPanelProps { page });
        } else if !page.has_error() && !page.loading {
            render_hint(frame, chunks[3], state.mode);
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("tab", "focus"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_hint(frame: &mut Frame, area: Rect, mode: LookupMode) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .split(area);

    let dim = Style::default().fg(Color::DarkGray);
    let prompt = Line::from(vec![
        Span::styled("Type a city and press ", dim),
        Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(prompt), chunks[0]);

    let detail = match mode {
        LookupMode::Mock => {
            let names: Vec<_> = demo_city_names().collect();
            format!("Using {}: {}", mode.label(), names.join(", "))
        }
        LookupMode::Live => format!("Using {}", mode.label()),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(detail, dim)).centered()),
        chunks[1],
    );
}
