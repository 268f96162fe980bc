use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Rows needed for a one-line message inside the border
pub const ERROR_BANNER_HEIGHT: u16 = 3;

/// Last error message; draws nothing without one
pub struct ErrorBanner;

pub struct ErrorBannerProps<'a> {
    pub error: Option<&'a str>,
}

impl Component<Action> for ErrorBanner {
    type Props<'a> = ErrorBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(error) = props.error else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(239, 68, 68)));

        let line = Line::from(vec![
            Span::raw(ERROR_ICON),
            Span::raw(" "),
            Span::styled(error.to_string(), Style::default().fg(Color::Rgb(254, 202, 202))),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
