//! # Actions
//!
//! Everything that can happen in TechHealth becomes an `Action`.
//! User picks "BMI" in the navbar? That's `Action::Navigate("imc")`.
//! User presses Enter on Calculate? That's `Action::Calculate`.
//!
//! The `update()` function takes the current state and an action and
//! mutates it in place. No I/O here; the returned `Effect` tells the
//! adapter if it has anything to do.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::bmi;
use crate::core::screen::Screen;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Go to the page with this id. Unknown ids land on `NotFound`.
    Navigate(String),
    ToggleTheme,
    SetWeight(String),
    SetHeight(String),
    Calculate,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(id) => {
            let target = Screen::from_id(&id);
            // A freshly opened calculator starts empty; re-selecting it does not.
            if target == Screen::Bmi && app.screen != Screen::Bmi {
                app.reset_calculator();
            }
            if target != app.screen {
                info!("Navigate {} -> {} (id={:?})", app.screen.label(), target.label(), id);
            }
            app.screen = target;
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            info!("Theme switched to {}", app.theme.label());
            Effect::None
        }
        Action::SetWeight(text) => {
            app.input.weight_kg = text;
            Effect::None
        }
        Action::SetHeight(text) => {
            app.input.height_cm = text;
            Effect::None
        }
        Action::Calculate => {
            app.result = bmi::classify_input(&app.input);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bmi::BmiCategory;
    use crate::core::theme::ThemeMode;
    use crate::test_support::test_app;

    fn navigate(app: &mut App, id: &str) -> Effect {
        update(app, Action::Navigate(id.to_string()))
    }

    #[test]
    fn test_navigate_known_pages_from_any_state() {
        for start in ["home", "imc", "erro-proposital"] {
            let mut app = test_app();
            navigate(&mut app, start);

            navigate(&mut app, "home");
            assert_eq!(app.screen, Screen::Home);

            navigate(&mut app, start);
            navigate(&mut app, "imc");
            assert_eq!(app.screen, Screen::Bmi);
        }
    }

    #[test]
    fn test_navigate_unknown_lands_on_not_found() {
        for id in ["erro-proposital", "about", "", "HOME"] {
            let mut app = test_app();
            navigate(&mut app, id);
            assert_eq!(app.screen, Screen::NotFound, "id {id:?}");
        }
    }

    #[test]
    fn test_not_found_recovers_via_home() {
        let mut app = test_app();
        navigate(&mut app, "erro-proposital");
        navigate(&mut app, "still-lost");
        assert_eq!(app.screen, Screen::NotFound);
        navigate(&mut app, "home");
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_toggle_theme_twice_is_identity_and_keeps_screen() {
        let mut app = test_app();
        navigate(&mut app, "imc");
        let original = app.theme;

        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, ThemeMode::Dark);
        assert_eq!(app.screen, Screen::Bmi);

        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, original);
        assert_eq!(app.screen, Screen::Bmi);
    }

    #[test]
    fn test_theme_survives_navigation() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme);
        navigate(&mut app, "imc");
        navigate(&mut app, "nowhere");
        navigate(&mut app, "home");
        assert_eq!(app.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_calculate_sets_result() {
        let mut app = test_app();
        navigate(&mut app, "imc");
        update(&mut app, Action::SetWeight("70".into()));
        update(&mut app, Action::SetHeight("175".into()));
        assert!(app.result.is_none(), "editing must not calculate");

        update(&mut app, Action::Calculate);
        let result = app.result.clone().unwrap();
        assert_eq!(result.display_value(), "22.86");
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_result_not_reactive_to_edits() {
        let mut app = test_app();
        navigate(&mut app, "imc");
        update(&mut app, Action::SetWeight("120".into()));
        update(&mut app, Action::SetHeight("170".into()));
        update(&mut app, Action::Calculate);

        update(&mut app, Action::SetWeight("45".into()));
        let result = app.result.clone().unwrap();
        assert_eq!(result.category, BmiCategory::ObesityGrade3);

        update(&mut app, Action::Calculate);
        assert_eq!(app.result.unwrap().category, BmiCategory::Underweight);
    }

    #[test]
    fn test_invalid_input_clears_result() {
        let mut app = test_app();
        navigate(&mut app, "imc");
        update(&mut app, Action::SetWeight("70".into()));
        update(&mut app, Action::SetHeight("175".into()));
        update(&mut app, Action::Calculate);
        assert!(app.result.is_some());

        update(&mut app, Action::SetWeight("-5".into()));
        update(&mut app, Action::Calculate);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_entering_calculator_starts_fresh() {
        let mut app = test_app();
        navigate(&mut app, "imc");
        update(&mut app, Action::SetWeight("70".into()));
        update(&mut app, Action::SetHeight("175".into()));
        update(&mut app, Action::Calculate);

        // Re-selecting the current page keeps the form
        navigate(&mut app, "imc");
        assert_eq!(app.input.weight_kg, "70");
        assert!(app.result.is_some());

        navigate(&mut app, "home");
        navigate(&mut app, "imc");
        assert!(app.input.weight_kg.is_empty());
        assert!(app.input.height_cm.is_empty());
        assert!(app.result.is_none());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(update(&mut app, Action::ToggleTheme), Effect::None);
    }
}
