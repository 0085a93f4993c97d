//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Navbar`: brand, page links, 404 trigger, theme toggle
//! - `Footer`: social links and copyright notice
//! - `HomeScreen`, `NotFoundScreen`: one per page
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputField`: single-line text field with a cursor
//! - `BmiScreen`: transient wrapper that borrows the two fields from `TuiState`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! global `App`. This keeps them testable against a `TestBackend`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Navbar::new(app.screen, app.theme, focused, palette).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! navbar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── navbar.rs       (top bar)
//! ├── footer.rs       (bottom bar)
//! ├── home.rs         (landing page)
//! ├── bmi_form.rs     (calculator + result card)
//! ├── not_found.rs    (404 page)
//! └── input_field.rs  (text field used by the calculator)
//! ```

pub mod bmi_form;
pub mod footer;
pub mod home;
pub mod input_field;
pub mod navbar;
pub mod not_found;

pub use bmi_form::BmiScreen;
pub use footer::{FOOTER_HEIGHT, Footer};
pub use home::HomeScreen;
pub use input_field::{FieldEvent, InputField};
pub use navbar::Navbar;
pub use not_found::NotFoundScreen;
