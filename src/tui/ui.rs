//! Frame layout and per-screen dispatch.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::screen::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BmiScreen, FOOTER_HEIGHT, Footer, HomeScreen, Navbar, NotFoundScreen};
use crate::tui::focus::Focus;
use crate::tui::palette::Palette;

/// Navbar rows, bottom border included.
const NAVBAR_HEIGHT: u16 = 2;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_mode(app.theme);
    let area = frame.area();

    // Paint the page background first so every screen inherits it
    frame.render_widget(Block::default().style(palette.base()), area);

    if !app.screen.has_chrome() {
        draw_screen(frame, inset(area), app, tui, palette);
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(NAVBAR_HEIGHT), Min(0), Length(FOOTER_HEIGHT)]);
    let [navbar_area, main_area, footer_area] = layout.areas(area);

    let focused_nav = match tui.focus {
        Focus::Nav(item) => Some(item),
        _ => None,
    };
    Navbar::new(app.screen, app.theme, focused_nav, palette).render(frame, navbar_area);

    draw_screen(frame, inset(main_area), app, tui, palette);

    Footer::new(&app.links, &app.copyright_holder, palette).render(frame, footer_area);
}

/// One renderer per screen variant.
fn draw_screen(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    match app.screen {
        Screen::Home => HomeScreen::new(palette).render(frame, area),
        Screen::Bmi => {
            tui.weight.focused = tui.focus == Focus::Weight;
            tui.height.focused = tui.focus == Focus::Height;
            BmiScreen::new(
                &mut tui.weight,
                &mut tui.height,
                app.result.as_ref(),
                tui.focus == Focus::Calculate,
                palette,
            )
            .render(frame, area);
        }
        Screen::NotFound => {
            NotFoundScreen::new(palette, tui.focus == Focus::BackHome).render(frame, area)
        }
    }
}

/// Page padding around the main content.
fn inset(area: Rect) -> Rect {
    area.inner(ratatui::layout::Margin::new(2, 1))
}
