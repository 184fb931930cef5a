use super::validation::{validate_leaving, validate_ticket_count};
use crate::booking::{AttendeePhoto, BookingDraft, TicketType, WizardStep};
use crate::errors::{Result, TiczError, ValidationError};
use crate::photo;
use crate::storage::{self, DraftStore};
use crate::ticket::{self, TicketCard};
use anyhow::Context;
use std::path::{Path, PathBuf};
use ticz_error::ValidationResult;

/// Owns the wizard position, the draft and its validation state.
///
/// Every field mutation writes the whole draft back to the store, so a restart
/// resumes with the same values (always on the Selection step).
#[derive(Debug)]
pub struct WizardController<S: DraftStore> {
    store: S,
    step: WizardStep,
    draft: BookingDraft,
    error: Option<ValidationError>,
}

impl<S: DraftStore> WizardController<S> {
    /// Start with an empty draft, ignoring anything saved in `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            step: WizardStep::Selection,
            draft: BookingDraft::default(),
            error: None,
        }
    }

    /// Resume the draft saved in `store`.
    pub fn restore(store: S) -> Self {
        let draft = storage::load_draft(&store);
        if !draft.is_pristine() {
            log::info!("📂 Restored saved booking draft");
        }
        Self {
            store,
            step: WizardStep::Selection,
            draft,
            error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn select_ticket_type(&mut self, ticket_type: TicketType) -> Result<()> {
        self.update(|draft| draft.ticket_type = Some(ticket_type))
    }

    pub fn set_ticket_count(&mut self, count: u8) -> Result<()> {
        validate_ticket_count(count)?;
        self.update(|draft| draft.ticket_count = count)
    }

    pub fn set_attendee_photo(&mut self, photo: AttendeePhoto) -> Result<()> {
        self.update(|draft| draft.attendee_photo = Some(photo))
    }

    pub fn clear_attendee_photo(&mut self) -> Result<()> {
        self.update(|draft| draft.attendee_photo = None)
    }

    /// Read an image from disk and attach it as the attendee photo.
    pub fn load_attendee_photo(&mut self, path: &Path) -> Result<()> {
        let photo = photo::load_photo(path)?;
        log::info!("🖼️ Attached photo {}", photo.file_name);
        self.set_attendee_photo(photo)
    }

    pub fn set_attendee_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.update(|draft| draft.attendee_name = name)
    }

    pub fn set_attendee_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        self.update(|draft| draft.attendee_email = email)
    }

    pub fn set_special_request(&mut self, request: impl Into<String>) -> Result<()> {
        let request = request.into();
        self.update(|draft| draft.special_request = request)
    }

    /// Advance one step if the current step's rules hold.
    ///
    /// On rejection the step stays put and the error is kept for display.
    /// Calling this on the last step is a no-op.
    pub fn next(&mut self) -> ValidationResult<WizardStep> {
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };
        if let Err(err) = validate_leaving(self.step, &self.draft) {
            log::info!("🛑 {} rejected: {}", self.step.title(), err);
            self.error = Some(err.clone());
            return Err(err);
        }
        self.error = None;
        self.go_to(next);
        Ok(next)
    }

    /// Return to the previous step without touching the draft.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.error = None;
            self.go_to(prev);
        }
        self.step
    }

    /// Reset every field, return to Selection and clear the store.
    pub fn cancel(&mut self) -> Result<()> {
        self.draft = BookingDraft::default();
        self.error = None;
        self.go_to(WizardStep::Selection);
        self.store
            .clear()
            .context("Failed to clear saved booking draft")
    }

    /// The booked ticket, available once the wizard reaches Confirmation.
    pub fn ticket(&self) -> Option<TicketCard> {
        if self.step != WizardStep::Confirmation {
            return None;
        }
        TicketCard::from_draft(&self.draft)
    }

    /// Write the ticket to `path` and start over with a fresh draft.
    pub fn export_ticket(&mut self, path: &Path) -> Result<PathBuf> {
        let card = self.ticket().ok_or(TiczError::NotConfirmed)?;
        ticket::write_ticket(&card, path)?;
        log::info!("🎟️ Ticket saved to {}", path.display());
        self.cancel()?;
        Ok(path.to_path_buf())
    }

    fn go_to(&mut self, step: WizardStep) {
        if self.step != step {
            log::info!(
                "🧭 Step {}/{}: {}",
                step.number(),
                WizardStep::TOTAL,
                step.title()
            );
        }
        self.step = step;
    }

    /// Apply `edit` to a copy of the draft and keep it only once it is saved,
    /// so the draft never gets ahead of the store.
    fn update<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut BookingDraft),
    {
        let mut draft = self.draft.clone();
        edit(&mut draft);
        storage::save_draft(&mut self.store, &draft).context("Failed to save booking draft")?;
        self.draft = draft;
        Ok(())
    }
}
