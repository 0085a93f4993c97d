//! # Focus Ring
//!
//! Which control receives Enter and typed characters. Each screen has a
//! fixed ring that Tab / Shift+Tab walk through, wrapping at both ends.

use crate::core::action::Action;
use crate::core::screen::{BMI_ID, HOME_ID, NOT_FOUND_TRIGGER_ID, Screen};

/// Buttons in the navbar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Bmi,
    Test404,
    Theme,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [NavItem::Home, NavItem::Bmi, NavItem::Test404, NavItem::Theme];

    /// The core action this button triggers.
    pub fn action(self) -> Action {
        match self {
            NavItem::Home => Action::Navigate(HOME_ID.to_string()),
            NavItem::Bmi => Action::Navigate(BMI_ID.to_string()),
            NavItem::Test404 => Action::Navigate(NOT_FOUND_TRIGGER_ID.to_string()),
            NavItem::Theme => Action::ToggleTheme,
        }
    }

    /// The screen this button leads to, if it is a page link.
    pub fn page(self) -> Option<Screen> {
        match self {
            NavItem::Home => Some(Screen::Home),
            NavItem::Bmi => Some(Screen::Bmi),
            NavItem::Test404 | NavItem::Theme => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav(NavItem),
    Weight,
    Height,
    Calculate,
    BackHome,
}

const HOME_RING: [Focus; 4] = [
    Focus::Nav(NavItem::Home),
    Focus::Nav(NavItem::Bmi),
    Focus::Nav(NavItem::Test404),
    Focus::Nav(NavItem::Theme),
];

const BMI_RING: [Focus; 7] = [
    Focus::Weight,
    Focus::Height,
    Focus::Calculate,
    Focus::Nav(NavItem::Home),
    Focus::Nav(NavItem::Bmi),
    Focus::Nav(NavItem::Test404),
    Focus::Nav(NavItem::Theme),
];

// The error page hides the navbar; its only control is the way back.
const NOT_FOUND_RING: [Focus; 1] = [Focus::BackHome];

impl Focus {
    pub fn ring(screen: Screen) -> &'static [Focus] {
        match screen {
            Screen::Home => &HOME_RING,
            Screen::Bmi => &BMI_RING,
            Screen::NotFound => &NOT_FOUND_RING,
        }
    }

    /// Where focus lands when a screen is entered.
    pub fn initial(screen: Screen) -> Focus {
        Focus::ring(screen)[0]
    }

    pub fn next(self, screen: Screen) -> Focus {
        Self::step(self, screen, 1)
    }

    pub fn prev(self, screen: Screen) -> Focus {
        let len = Focus::ring(screen).len();
        Self::step(self, screen, len - 1)
    }

    fn step(self, screen: Screen, by: usize) -> Focus {
        let ring = Focus::ring(screen);
        match ring.iter().position(|f| *f == self) {
            Some(i) => ring[(i + by) % ring.len()],
            None => ring[0],
        }
    }

    /// True for controls that consume typed characters.
    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Weight | Focus::Height)
    }
}
