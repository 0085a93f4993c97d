//! # Home Screen
//!
//! Landing page: welcome heading and a card pointing at the calculator.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::navbar::BRAND;
use crate::tui::palette::Palette;

const CARD_WIDTH: u16 = 72;

pub struct HomeScreen {
    pub palette: Palette,
}

impl HomeScreen {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;

        let heading = vec![
            Line::from(Span::styled(
                format!("Welcome to {BRAND}"),
                Style::default().fg(p.primary_text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Innovating your well-being with technology.",
                p.secondary(),
            )),
        ];

        let [heading_area, _, card_area] = Layout::vertical([
            Constraint::Length(heading.len() as u16),
            Constraint::Length(1),
            Constraint::Length(6),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(Paragraph::new(heading).centered(), heading_area);

        let [card_area] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(card_area);

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                "Explore our features",
                Style::default().fg(p.primary_text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Use the navigation bar above (Tab, or press i) to explore \
                 what we offer, such as our complete BMI calculator.",
                p.secondary(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .centered()
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(p.border())
                .padding(Padding::horizontal(1)),
        )
        .style(p.surface());

        frame.render_widget(card, card_area);
    }
}
