//! # Palette
//!
//! Colours for the current `ThemeMode`, plus the fixed result-card colours
//! per `Severity`. Card colours do not change with the theme so the
//! category always reads the same way.

use ratatui::style::{Color, Modifier, Style};

use crate::core::bmi::Severity;
use crate::core::theme::ThemeMode;

const SLATE_900: Color = Color::Rgb(15, 23, 42);
const SLATE_800: Color = Color::Rgb(30, 41, 59);
const SLATE_700: Color = Color::Rgb(51, 65, 85);
const GRAY_50: Color = Color::Rgb(249, 250, 251);
const GRAY_200: Color = Color::Rgb(229, 231, 235);
const GRAY_400: Color = Color::Rgb(156, 163, 175);
const GRAY_500: Color = Color::Rgb(107, 114, 128);
const GRAY_800: Color = Color::Rgb(31, 41, 55);
const GRAY_900: Color = Color::Rgb(17, 24, 39);
const BLUE_500: Color = Color::Rgb(59, 130, 246);
const BLUE_600: Color = Color::Rgb(37, 99, 235);
const RED_500: Color = Color::Rgb(239, 68, 68);
const YELLOW_400: Color = Color::Rgb(250, 204, 21);
const YELLOW_500: Color = Color::Rgb(234, 179, 8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub primary_text: Color,
    pub secondary_text: Color,
    pub border: Color,
    pub input_bg: Color,
    pub input_text: Color,
    /// Buttons and the brand name.
    pub primary: Color,
    pub on_primary: Color,
    /// Active navbar entry.
    pub accent: Color,
    /// The "Test 404" button.
    pub danger: Color,
    pub warning_icon: Color,
    /// Theme toggle glyph.
    pub toggle: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        Self {
            background: if dark { SLATE_900 } else { GRAY_50 },
            surface: if dark { SLATE_800 } else { Color::White },
            primary_text: if dark { Color::White } else { GRAY_800 },
            secondary_text: if dark { GRAY_400 } else { GRAY_500 },
            border: if dark { SLATE_700 } else { GRAY_200 },
            input_bg: if dark { SLATE_700 } else { Color::White },
            input_text: if dark { Color::White } else { GRAY_900 },
            primary: BLUE_600,
            on_primary: Color::White,
            accent: BLUE_500,
            danger: RED_500,
            warning_icon: YELLOW_500,
            toggle: if dark { YELLOW_400 } else { SLATE_700 },
        }
    }

    /// Base style for a screen: page text on the page background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.primary_text).bg(self.background)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.primary_text).bg(self.surface)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.secondary_text)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for a button, filled when focused.
    pub fn button(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.on_primary)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
        }
    }
}

/// Foreground/background/border of the result card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

pub fn severity_colors(severity: Severity) -> CardColors {
    let (fg, bg, border) = match severity {
        // yellow
        Severity::Caution => ((113, 63, 18), (254, 249, 195), (250, 204, 21)),
        // green
        Severity::Healthy => ((20, 83, 45), (220, 252, 231), (74, 222, 128)),
        // orange
        Severity::Warning => ((124, 45, 18), (255, 237, 213), (251, 146, 60)),
        // red
        Severity::Danger => ((127, 29, 29), (254, 226, 226), (248, 113, 113)),
        // rose
        Severity::Critical => ((136, 19, 55), (254, 205, 211), (244, 63, 94)),
    };
    let rgb = |(r, g, b): (u8, u8, u8)| Color::Rgb(r, g, b);
    CardColors {
        fg: rgb(fg),
        bg: rgb(bg),
        border: rgb(border),
    }
}
