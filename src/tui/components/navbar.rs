//! # Navbar Component
//!
//! Top bar with the brand name, page links, the "Test 404" trigger and the
//! theme toggle. Purely presentational: all data arrives as props and the
//! key handling lives in the event loop.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::screen::Screen;
use crate::core::theme::ThemeMode;
use crate::tui::component::Component;
use crate::tui::focus::NavItem;
use crate::tui::palette::Palette;

pub const BRAND: &str = "TechHealth Solutions";

pub struct Navbar {
    pub active: Screen,
    pub theme: ThemeMode,
    /// Navbar button holding focus, if any.
    pub focused: Option<NavItem>,
    pub palette: Palette,
}

impl Navbar {
    pub fn new(
        active: Screen,
        theme: ThemeMode,
        focused: Option<NavItem>,
        palette: Palette,
    ) -> Self {
        Self {
            active,
            theme,
            focused,
            palette,
        }
    }

    fn item_label(&self, item: NavItem) -> &'static str {
        match item {
            NavItem::Home => " ⌂ Home ",
            NavItem::Bmi => " ♥ BMI ",
            NavItem::Test404 => " Test 404 ",
            // Shows the mode a press switches to
            NavItem::Theme => match self.theme {
                ThemeMode::Light => " ☾ ",
                ThemeMode::Dark => " ☀ ",
            },
        }
    }

    fn item_style(&self, item: NavItem) -> Style {
        let p = &self.palette;
        let is_active = item.page() == Some(self.active);
        let mut style = match item {
            NavItem::Test404 => Style::default().fg(p.danger),
            NavItem::Theme => Style::default().fg(p.toggle),
            _ if is_active => Style::default()
                .fg(p.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            _ => Style::default().fg(p.secondary_text),
        };
        if self.focused == Some(item) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn items_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(NavItem::ALL.len() * 2);
        for (i, item) in NavItem::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(self.item_label(*item), self.item_style(*item)));
        }
        Line::from(spans).right_aligned()
    }
}

impl Component for Navbar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.palette.border())
            .style(self.palette.surface());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [brand_area, items_area] =
            Layout::horizontal([Constraint::Length(BRAND.len() as u16 + 2), Constraint::Min(0)])
                .areas(inner);

        let brand = Paragraph::new(Span::styled(
            format!(" {BRAND}"),
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(brand, brand_area);
        frame.render_widget(Paragraph::new(self.items_line()), items_area);
    }
}
