//! # InputField Component
//!
//! Single-line labelled text field used by the BMI form.
//!
//! ## Responsibilities
//!
//! - Capture text input (typed and pasted)
//! - Handle editing (backspace, delete, cursor movement)
//! - Report submission (Enter) so the form can calculate
//!
//! The buffer is internal state; the parent mirrors it into the core
//! `BmiInput` on every `Changed` event. Cursor position is a byte offset.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Border (1) on each side.
const BORDER_OFFSET: u16 = 1;

/// High-level events emitted by the InputField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Buffer content changed; carries the full new text.
    Changed(String),
    /// Enter pressed inside the field.
    Submit,
    /// Cursor moved without changing the text.
    CursorMoved,
}

pub struct InputField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub buffer: String,
    /// Byte offset into `buffer` (0..=buffer.len())
    cursor: usize,
    // Props, refreshed by the parent before each render
    pub focused: bool,
    pub palette: Palette,
}

impl InputField {
    pub fn new(label: &'static str, placeholder: &'static str, palette: Palette) -> Self {
        Self {
            label,
            placeholder,
            buffer: String::new(),
            cursor: 0,
            focused: false,
            palette,
        }
    }

    /// Replace the text (e.g. when the core resets the form). Cursor goes to the end.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
        }
    }

    /// Screen position of the cursor for a field rendered in `area`.
    fn cursor_screen_pos(&self, area: Rect) -> (u16, u16) {
        let col = self.buffer[..self.cursor].width() as u16;
        let max_col = area.width.saturating_sub(2 * BORDER_OFFSET + 1);
        (
            area.x + BORDER_OFFSET + col.min(max_col),
            area.y + BORDER_OFFSET,
        )
    }

    fn insert(&mut self, text: &str) -> FieldEvent {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
        FieldEvent::Changed(self.buffer.clone())
    }
}

impl Component for InputField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let border_style = if self.focused {
            Style::default().fg(palette.accent)
        } else {
            palette.border()
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(self.label, palette.secondary()));

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(self.placeholder, palette.secondary()))
        } else {
            Line::from(Span::styled(
                self.buffer.as_str(),
                Style::default().fg(palette.input_text),
            ))
        };

        let field = Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(palette.input_bg));
        frame.render_widget(field, area);

        if self.focused {
            frame.set_cursor_position(self.cursor_screen_pos(area));
        }
    }
}

impl EventHandler for InputField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                Some(self.insert(c.encode_utf8(&mut tmp)))
            }
            TuiEvent::Paste(text) => {
                // Single line: drop line breaks from pasted text
                let flat: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                (!flat.is_empty()).then(|| self.insert(&flat))
            }
            TuiEvent::Backspace => {
                let prev = self.buffer[..self.cursor].char_indices().next_back()?.0;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Delete => {
                let len = self.buffer[self.cursor..].chars().next()?.len_utf8();
                self.buffer.drain(self.cursor..self.cursor + len);
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::CursorLeft => {
                let prev = self.buffer[..self.cursor].char_indices().next_back()?.0;
                self.cursor = prev;
                Some(FieldEvent::CursorMoved)
            }
            TuiEvent::CursorRight => {
                let len = self.buffer[self.cursor..].chars().next()?.len_utf8();
                self.cursor += len;
                Some(FieldEvent::CursorMoved)
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}
