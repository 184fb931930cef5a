//! Booking form state: the draft being filled in and the wizard step it is on.

mod draft;
mod step;
mod summary;

pub use crate::photo::AttendeePhoto;
pub use draft::{BookingDraft, TicketType, DEFAULT_TICKET_COUNT, MAX_TICKET_COUNT};
pub use step::WizardStep;
pub use summary::DraftSummary;
