use artbox::{
    integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, Fill,
    LinearGradient, Renderer, fonts,
};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::assets::Background;
use crate::page::PageState;

/// Draws the filled-in result elements of the page
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub page: &'a PageState,
}

/// Rows besides the large temperature: city, blank, glyph, description,
/// humidity, wind, blank, icon ref, background ref.
const FIXED_ROWS: u16 = 9;

fn temperature_fill(background: Background) -> Fill {
    let (start, end) = match background {
        Background::Rain => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        Background::Cloudy => (ArtColor::rgb(180, 180, 190), ArtColor::rgb(220, 220, 230)),
        Background::Clear => (ArtColor::rgb(255, 220, 100), ArtColor::rgb(255, 150, 80)),
        Background::Mist => (ArtColor::rgb(200, 200, 210), ArtColor::rgb(160, 170, 180)),
        Background::Default => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let page = props.page;
        let background = page.background.unwrap_or(Background::Default);

        frame.render_widget(Block::default().style(Style::default().bg(background.tint())), area);

        let temp_cap = area.height.saturating_sub(FIXED_ROWS).clamp(1, 6);
        let chunks = Layout::vertical([
            Constraint::Length(1),        // city
            Constraint::Length(1),        // blank
            Constraint::Length(1),        // glyph
            Constraint::Max(temp_cap),    // temperature
            Constraint::Length(1),        // description
            Constraint::Length(1),        // humidity
            Constraint::Length(1),        // wind
            Constraint::Length(1),        // blank
            Constraint::Length(1),        // icon ref
            Constraint::Length(1),        // background ref
        ])
        .flex(Flex::Center)
        .split(area);

        let city = Line::from(Span::styled(
            page.city_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(city), chunks[0]);

        if let Some(icon) = &page.icon {
            frame.render_widget(Paragraph::new(Line::from(icon.glyph()).centered()), chunks[2]);
        }

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(background));
        frame.render_widget(ArtBox::new(&renderer, &page.temperature), chunks[3]);

        let gray = Style::default().fg(Color::Gray);
        for (text, chunk) in [
            (&page.description, chunks[4]),
            (&page.humidity, chunks[5]),
            (&page.wind, chunks[6]),
        ] {
            let line = Line::from(Span::styled(text.clone(), gray)).centered();
            frame.render_widget(Paragraph::new(line), chunk);
        }

        let dim = Style::default().fg(Color::DarkGray);
        if let Some(icon) = &page.icon {
            let line = Line::from(vec![
                Span::styled("icon ", dim),
                Span::styled(icon.location().to_string(), dim),
                Span::styled(format!(" ({})", page.icon_alt), dim),
            ])
            .centered();
            frame.render_widget(Paragraph::new(line), chunks[8]);
        }
        if let Some(background) = page.background {
            let line = Line::from(vec![
                Span::styled("background ", dim),
                Span::styled(background.path(), dim),
            ])
            .centered();
            frame.render_widget(Paragraph::new(line), chunks[9]);
        }
    }
}
