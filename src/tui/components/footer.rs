//! # Footer Component
//!
//! Social links and the copyright notice. Links are printed with their URL
//! since a terminal cannot open them on click.

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::config::SocialLink;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Rows taken by the footer, border included.
pub const FOOTER_HEIGHT: u16 = 4;

pub struct Footer<'a> {
    pub links: &'a [SocialLink],
    pub copyright_holder: &'a str,
    pub year: i32,
    pub palette: Palette,
}

impl<'a> Footer<'a> {
    pub fn new(links: &'a [SocialLink], copyright_holder: &'a str, palette: Palette) -> Self {
        Self {
            links,
            copyright_holder,
            year: chrono::Local::now().year(),
            palette,
        }
    }

    fn links_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", self.palette.secondary()));
            }
            spans.push(Span::styled(
                link.name.as_str(),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                link.url.as_str(),
                self.palette.secondary().add_modifier(Modifier::UNDERLINED),
            ));
        }
        Line::from(spans).centered()
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.palette.border())
            .style(self.palette.surface());

        let notice = Line::from(Span::styled(
            format!(
                "© {} {}. All rights reserved.",
                self.year, self.copyright_holder
            ),
            self.palette.secondary(),
        ))
        .centered();

        let footer = Paragraph::new(vec![self.links_line(), Line::default(), notice]).block(block);
        frame.render_widget(footer, area);
    }
}
