use techhealth::core::action::{Action, Effect, update};
use techhealth::core::bmi::{BmiCategory, BmiResult, Severity, classify};
use techhealth::core::screen::Screen;
use techhealth::core::state::App;
use techhealth::core::theme::ThemeMode;
use techhealth::tui::event::TuiEvent;
use techhealth::tui::{TuiState, handle_event};

// ============================================================================
// Helper Functions
// ============================================================================

fn navigate(app: &mut App, id: &str) {
    update(app, Action::Navigate(id.to_string()));
}

/// Runs a full calculation through the reducer and returns the result.
fn calculate(app: &mut App, weight: &str, height: &str) -> Option<BmiResult> {
    navigate(app, "imc");
    update(app, Action::SetWeight(weight.to_string()));
    update(app, Action::SetHeight(height.to_string()));
    update(app, Action::Calculate);
    app.result.clone()
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_every_unknown_id_lands_on_not_found() {
    let ids = ["erro-proposital", "contact", "imc ", "home/", "Imc", "0", "🙂"];
    for id in ids {
        let mut app = App::new(ThemeMode::Light);
        navigate(&mut app, id);
        assert_eq!(app.screen, Screen::NotFound, "id {id:?}");
    }
}

#[test]
fn test_session_walkthrough() {
    let mut app = App::new(ThemeMode::Light);
    assert_eq!(app.screen, Screen::Home);

    navigate(&mut app, "imc");
    assert_eq!(app.screen, Screen::Bmi);

    update(&mut app, Action::ToggleTheme);
    navigate(&mut app, "erro-proposital");
    assert_eq!(app.screen, Screen::NotFound);
    assert_eq!(app.theme, ThemeMode::Dark);

    navigate(&mut app, "home");
    assert_eq!(app.screen, Screen::Home);
    update(&mut app, Action::ToggleTheme);
    assert_eq!(app.theme, ThemeMode::Light);

    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

// ============================================================================
// Classification through the session
// ============================================================================

#[test]
fn test_reference_calculations() {
    let mut app = App::new(ThemeMode::Light);

    let r = calculate(&mut app, "70", "175").unwrap();
    assert_eq!((r.display_value().as_str(), r.category), ("22.86", BmiCategory::Normal));

    let r = calculate(&mut app, "50", "160").unwrap();
    assert_eq!((r.display_value().as_str(), r.category), ("19.53", BmiCategory::Normal));

    let r = calculate(&mut app, "120", "170").unwrap();
    assert_eq!(r.display_value(), "41.52");
    assert_eq!(r.category.label(), "Obesity Grade III (morbid)");
    assert_eq!(r.severity, Severity::Critical);

    let r = calculate(&mut app, "45", "170").unwrap();
    assert_eq!((r.display_value().as_str(), r.category), ("15.57", BmiCategory::Underweight));

    assert!(calculate(&mut app, "-5", "170").is_none());
    assert!(calculate(&mut app, "abc", "170").is_none());
    assert!(calculate(&mut app, "70", "0").is_none());
}

#[test]
fn test_classify_matches_session_result() {
    let mut app = App::new(ThemeMode::Light);
    let from_session = calculate(&mut app, "56.4", "174.9");
    assert_eq!(from_session, classify(56.4, 174.9));
    assert_eq!(from_session.unwrap().category, BmiCategory::Underweight);
}

// ============================================================================
// Keyboard-driven flow
// ============================================================================

#[test]
fn test_keyboard_session() {
    let mut app = App::new(ThemeMode::Dark);
    let mut tui = TuiState::new(&app);

    // Tab to the BMI link and open it
    handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
    handle_event(&mut app, &mut tui, TuiEvent::Submit);
    assert_eq!(app.screen, Screen::Bmi);

    for c in "80".chars() {
        handle_event(&mut app, &mut tui, TuiEvent::InputChar(c));
    }
    handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
    handle_event(&mut app, &mut tui, TuiEvent::Paste("180".to_string()));
    handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
    handle_event(&mut app, &mut tui, TuiEvent::Submit);

    let result = app.result.clone().unwrap();
    assert_eq!(result.display_value(), "24.69");
    assert_eq!(result.category, BmiCategory::Normal);

    assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
}
