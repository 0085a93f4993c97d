//! # Core Application Logic
//!
//! This module contains TechHealth's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session data) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • classify() (BMI)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`screen`]: Page identifiers and navigation id resolution
//! - [`theme`]: Light/dark flag
//! - [`bmi`]: The BMI classifier
//! - [`config`]: Startup settings (the only part that touches the filesystem)

pub mod action;
pub mod bmi;
pub mod config;
pub mod screen;
pub mod state;
pub mod theme;
