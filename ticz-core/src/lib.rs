//! 🎟️ Ticz core library.
//!
//! `ticz-core` holds the booking draft, the three-step wizard controller, draft
//! persistence and ticket rendering. The TUI crate and the `ticz` binary build on it.

pub mod booking;
pub mod cli;
pub mod config;
pub mod errors;
pub mod event;
pub mod logging;
pub mod photo;
pub mod storage;
pub mod ticket;
pub mod wizard;

pub use booking::{AttendeePhoto, BookingDraft, TicketType, WizardStep};
pub use errors::{TiczError, ValidationError};
pub use storage::{DraftStore, FileStore, MemoryStore};
pub use wizard::WizardController;
