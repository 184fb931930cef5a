//! Ticz TUI.
//!
//! A ratatui front end over `ticz_core::WizardController`.

pub mod input;
pub mod widgets;
pub mod wizard;
