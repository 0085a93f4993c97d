//! # BMI Screen
//!
//! Calculator form (weight, height, Calculate button) and the result card.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the two `InputField`s live in `TuiState`
//! - `BmiScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::bmi::BmiResult;
use crate::tui::component::Component;
use crate::tui::components::input_field::InputField;
use crate::tui::palette::{Palette, severity_colors};

const FORM_WIDTH: u16 = 48;
const FIELD_HEIGHT: u16 = 3;
const RESULT_HEIGHT: u16 = 9;

pub const CALCULATE_LABEL: &str = "Calculate";

pub struct BmiScreen<'a> {
    weight: &'a mut InputField,
    height: &'a mut InputField,
    result: Option<&'a BmiResult>,
    calculate_focused: bool,
    palette: Palette,
}

impl<'a> BmiScreen<'a> {
    pub fn new(
        weight: &'a mut InputField,
        height: &'a mut InputField,
        result: Option<&'a BmiResult>,
        calculate_focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            weight,
            height,
            result,
            calculate_focused,
            palette,
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let style = self.palette.button(self.calculate_focused);
        let border = if self.calculate_focused {
            Style::default().fg(self.palette.accent)
        } else {
            self.palette.border()
        };
        let button = Paragraph::new(Line::from(Span::styled(CALCULATE_LABEL, style)))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        frame.render_widget(button, area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, result: &BmiResult) {
        let colors = severity_colors(result.severity);
        let text = Style::default().fg(colors.fg);

        let lines = vec![
            Line::from(Span::styled("RESULT", text.add_modifier(Modifier::DIM | Modifier::BOLD))),
            Line::from(Span::styled(
                result.display_value(),
                text.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                result.category.label(),
                text.add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Tip: ", text.add_modifier(Modifier::BOLD)),
                Span::styled(result.tip, text),
            ]),
        ];

        let card = Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(colors.border))
                    .padding(Padding::horizontal(1)),
            )
            .style(Style::default().bg(colors.bg));
        frame.render_widget(card, area);
    }
}

impl Component for BmiScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;

        let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let [title_area, _, form_area, _, result_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT * 3 + 2),
            Constraint::Length(1),
            Constraint::Length(RESULT_HEIGHT),
        ])
        .flex(Flex::Start)
        .areas(column);

        let title = Paragraph::new(Span::styled(
            "BMI Calculator",
            Style::default().fg(p.primary_text).add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(title, title_area);

        let form_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(p.border())
            .style(p.surface());
        let form_inner = form_block.inner(form_area);
        frame.render_widget(form_block, form_area);

        let [weight_area, height_area, button_area] =
            Layout::vertical([Constraint::Length(FIELD_HEIGHT); 3]).areas(form_inner);

        self.weight.palette = p;
        self.height.palette = p;
        self.weight.render(frame, weight_area);
        self.height.render(frame, height_area);
        self.render_button(frame, button_area);

        if let Some(result) = self.result {
            self.render_result(frame, result_area, result);
        }
    }
}
