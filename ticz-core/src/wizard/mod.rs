//! The three-step booking wizard: transitions, validation and persistence.

mod controller;
pub mod validation;

pub use controller::WizardController;
