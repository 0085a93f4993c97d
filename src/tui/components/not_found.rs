//! # Not Found Screen
//!
//! Shown for every unknown navigation id. The only way out is the
//! "Back to Home" button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const BACK_HOME_LABEL: &str = "  Back to Home  ";

pub struct NotFoundScreen {
    pub palette: Palette,
    pub button_focused: bool,
}

impl NotFoundScreen {
    pub fn new(palette: Palette, button_focused: bool) -> Self {
        Self {
            palette,
            button_focused,
        }
    }
}

impl Component for NotFoundScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;

        let lines = vec![
            Line::from(Span::styled(
                "⚠",
                Style::default().fg(p.warning_icon).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Oops!",
                Style::default().fg(p.primary_text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Page 404", p.secondary().add_modifier(Modifier::BOLD))),
            Line::default(),
            Line::from(Span::styled(
                "The page you are looking for was not found.",
                p.secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(BACK_HOME_LABEL, p.button(self.button_focused))),
        ];

        let [content_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).centered(), content_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_not_found_renders_message_and_button() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut screen = NotFoundScreen::new(Palette::for_mode(ThemeMode::Dark), true);
        terminal.draw(|f| screen.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Oops!"));
        assert!(text.contains("Page 404"));
        assert!(text.contains("Back to Home"));
    }
}
