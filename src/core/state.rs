//! # Application State
//!
//! Core session state for TechHealth. Domain data only - no TUI types.
//! Focus, cursors and colours live in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen               // page on display
//! ├── theme: ThemeMode             // light / dark
//! ├── input: BmiInput              // calculator fields, raw text
//! ├── result: Option<BmiResult>    // last calculation (None = nothing to show)
//! ├── links: Vec<SocialLink>       // footer links, from config
//! └── copyright_holder: String     // footer notice, from config
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::bmi::{BmiInput, BmiResult};
use crate::core::config::{DEFAULT_COPYRIGHT_HOLDER, ResolvedConfig, SocialLink};
use crate::core::screen::Screen;
use crate::core::theme::ThemeMode;

#[derive(Debug, Clone)]
pub struct App {
    pub screen: Screen,
    pub theme: ThemeMode,
    pub input: BmiInput,
    /// Only written by `Action::Calculate`, never by field edits.
    pub result: Option<BmiResult>,
    pub links: Vec<SocialLink>,
    pub copyright_holder: String,
}

impl App {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            screen: Screen::default(),
            theme,
            input: BmiInput::default(),
            result: None,
            links: Vec::new(),
            copyright_holder: DEFAULT_COPYRIGHT_HOLDER.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            links: config.links.clone(),
            copyright_holder: config.copyright_holder.clone(),
            ..Self::new(config.theme)
        }
    }

    /// Empties the calculator, as if it were opened for the first time.
    pub fn reset_calculator(&mut self) {
        self.input = BmiInput::default();
        self.result = None;
    }
}
