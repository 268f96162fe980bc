use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const APP_TITLE: &str = "Weather Insights";
pub const APP_SUBTITLE: &str = "Real-time Meteorological Data";

/// Static branding header: large title plus a one-line subtitle
pub struct AppHeader;

fn title_fill() -> Fill {
    let stops = vec![
        ColorStop::new(0.0, ArtColor::rgb(59, 130, 246)), // Blue
        ColorStop::new(1.0, ArtColor::rgb(6, 182, 212)),  // Cyan
    ];
    Fill::Linear(LinearGradient::new(5.0, stops))
}

impl Component<Action> for AppHeader {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Title, artbox picks the largest font that fits
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(title_fill());
        frame.render_widget(ArtBox::new(&renderer, APP_TITLE), chunks[0]);

        let subtitle = Line::styled(APP_SUBTITLE, Style::default().fg(Color::LightBlue)).centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::RenderHarness;

    #[test]
    fn test_subtitle_on_last_row() {
        let mut render = RenderHarness::new(60, 8);
        let output = render.render_to_string_plain(|frame| {
            AppHeader.render(frame, frame.area(), ());
        });

        let last = output.lines().last().unwrap_or_default();
        assert!(last.contains(APP_SUBTITLE), "{output}");
    }
}
