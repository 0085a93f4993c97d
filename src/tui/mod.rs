//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks up to 500ms waiting for input and
//! only redraws after an event (including terminal resize).
//!
//! ## Focus
//!
//! Every screen has a focus ring (see [`focus`]). Enter activates the
//! focused control; typed characters go to the focused text field. When no
//! field has focus, single letters act as shortcuts.

mod component;
mod components;
pub mod event;
pub mod focus;
mod palette;
mod ui;

use log::{debug, error, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::screen::{BMI_ID, HOME_ID, NOT_FOUND_TRIGGER_ID, Screen};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, InputField};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::focus::Focus;
use crate::tui::palette::Palette;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    weight: InputField,
    height: InputField,
    /// Screen seen by the last `sync`, to detect transitions.
    last_screen: Screen,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let palette = Palette::for_mode(app.theme);
        Self {
            focus: Focus::initial(app.screen),
            weight: InputField::new("Weight (kg)", "e.g. 70.5", palette),
            height: InputField::new("Height (cm)", "e.g. 175", palette),
            last_screen: app.screen,
        }
    }

    /// Reconciles presentation state with the core after an update: resets
    /// focus when the screen changed and mirrors the field text.
    pub fn sync(&mut self, app: &App) {
        if app.screen != self.last_screen {
            debug!("Screen changed to {:?}, resetting focus", app.screen);
            self.focus = Focus::initial(app.screen);
            self.last_screen = app.screen;
        }
        self.weight.set_text(&app.input.weight_kg);
        self.height.set_text(&app.input.height_cm);
    }

    fn focused_field(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::Weight => Some(&mut self.weight),
            Focus::Height => Some(&mut self.height),
            _ => None,
        }
    }
}

/// Translates one event into zero or more core actions and applies them.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = match route(app, tui, &event) {
        Some(action) => update(app, action),
        None => Effect::None,
    };
    tui.sync(app);
    effect
}

/// Decides which action (if any) an event means in the current focus.
fn route(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Global keys first
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ToggleTheme => return Some(Action::ToggleTheme),
        TuiEvent::Resize => return None,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next(app.screen);
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev(app.screen);
            return None;
        }
        _ => {}
    }

    if tui.focus.is_text_field() {
        if matches!(event, TuiEvent::Escape) {
            tui.focus = Focus::Calculate;
            return None;
        }
        let focus = tui.focus;
        let field = tui.focused_field()?;
        return match field.handle_event(event)? {
            FieldEvent::Changed(text) if focus == Focus::Weight => Some(Action::SetWeight(text)),
            FieldEvent::Changed(text) => Some(Action::SetHeight(text)),
            FieldEvent::Submit => Some(Action::Calculate),
            FieldEvent::CursorMoved => None,
        };
    }

    match event {
        TuiEvent::Submit => Some(activate(tui.focus)),
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::InputChar(c) => shortcut(*c),
        _ => None,
    }
}

/// The action behind pressing Enter on a (non-text) control.
fn activate(focus: Focus) -> Action {
    match focus {
        Focus::Nav(item) => item.action(),
        Focus::BackHome => Action::Navigate(HOME_ID.to_string()),
        // Text fields submit through FieldEvent::Submit
        Focus::Calculate | Focus::Weight | Focus::Height => Action::Calculate,
    }
}

fn shortcut(c: char) -> Option<Action> {
    match c.to_ascii_lowercase() {
        'h' => Some(Action::Navigate(HOME_ID.to_string())),
        'i' => Some(Action::Navigate(BMI_ID.to_string())),
        'x' => Some(Action::Navigate(NOT_FOUND_TRIGGER_ID.to_string())),
        't' => Some(Action::ToggleTheme),
        'q' => Some(Action::Quit),
        _ => None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

const POLL_TIMEOUT: Duration = Duration::from_millis(500);

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(
        &mut app,
        &mut tui,
        |app, tui| terminal.draw(|f| ui::draw_ui(f, app, tui)).map(|_| ()),
        poll_event_timeout,
    );

    // Restore on every exit path so an error never leaves the terminal raw
    ratatui::restore();
    match &result {
        Ok(()) => info!("TechHealth shutting down"),
        Err(e) => error!("TechHealth stopped on terminal error: {}", e),
    }
    result
}

/// Draw/poll loop. Returns when an event quits the app, or with the first
/// draw or poll error.
fn event_loop<D, P>(
    app: &mut App,
    tui: &mut TuiState,
    mut draw: D,
    mut poll: P,
) -> io::Result<()>
where
    D: FnMut(&App, &mut TuiState) -> io::Result<()>,
    P: FnMut(Duration) -> io::Result<Option<TuiEvent>>,
{
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            draw(app, tui)?;
            needs_redraw = false;
        }

        let Some(mut event) = poll(POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        loop {
            if handle_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            match poll(Duration::ZERO)? {
                Some(next) => event = next,
                None => break,
            }
        }
    }
}
