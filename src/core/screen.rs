//! # Screens
//!
//! Which page is on display. Navigation requests carry free-form ids;
//! anything not recognised lands on `NotFound`.

/// Id of the landing page.
pub const HOME_ID: &str = "home";
/// Id of the BMI calculator.
pub const BMI_ID: &str = "imc";
/// Id used by the navbar's "Test 404" button. Not a real page.
pub const NOT_FOUND_TRIGGER_ID: &str = "erro-proposital";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Bmi,
    NotFound,
}

impl Screen {
    /// Resolves a navigation id. Only `"home"` and `"imc"` are known pages.
    pub fn from_id(id: &str) -> Self {
        match id {
            HOME_ID => Screen::Home,
            BMI_ID => Screen::Bmi,
            _ => Screen::NotFound,
        }
    }

    /// Title shown in the navbar and logs.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Bmi => "BMI",
            Screen::NotFound => "404",
        }
    }

    /// Navbar and footer are hidden on the error page.
    pub fn has_chrome(self) -> bool {
        !matches!(self, Screen::NotFound)
    }
}
