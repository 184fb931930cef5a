//! Keyboard state machine for the booking TUI.

use crate::input::InputField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};
use ticz_core::booking::{TicketType, WizardStep, MAX_TICKET_COUNT};
use ticz_core::event::TICKET_TIERS;
use ticz_core::storage::DraftStore;
use ticz_core::WizardController;

/// Lowest count the selector offers; 0 is only reachable from scripts.
pub const MIN_SELECTABLE_COUNT: u8 = 1;

/// Result of handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    Exported(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
    Photo,
    Name,
    Email,
    SpecialRequest,
}

impl DetailsField {
    pub fn all() -> &'static [DetailsField] {
        &[
            DetailsField::Photo,
            DetailsField::Name,
            DetailsField::Email,
            DetailsField::SpecialRequest,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailsField::Photo => "Upload Profile Photo",
            DetailsField::Name => "Enter your name",
            DetailsField::Email => "Enter your email",
            DetailsField::SpecialRequest => "Special request?",
        }
    }

    fn offset(&self, delta: isize) -> DetailsField {
        let all = Self::all();
        let len = all.len() as isize;
        let index = all.iter().position(|f| f == self).unwrap_or(0) as isize;
        all[(index + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    BookAnother,
    Download,
}

impl ConfirmAction {
    pub fn label(&self) -> &'static str {
        match self {
            ConfirmAction::BookAnother => "Book Another Ticket",
            ConfirmAction::Download => "Download Ticket",
        }
    }

    fn toggled(&self) -> ConfirmAction {
        match self {
            ConfirmAction::BookAnother => ConfirmAction::Download,
            ConfirmAction::Download => ConfirmAction::BookAnother,
        }
    }
}

pub struct App<S: DraftStore> {
    pub wizard: WizardController<S>,
    pub tier_index: usize,
    pub focus: DetailsField,
    pub photo_input: InputField,
    pub name_input: InputField,
    pub email_input: InputField,
    pub request_input: InputField,
    pub confirm_action: ConfirmAction,
    pub status_message: String,
    pub export_path: PathBuf,
    /// Photo path behind the attached photo, to spot a retyped path.
    loaded_photo_path: Option<String>,
}

impl<S: DraftStore> App<S> {
    pub fn new(wizard: WizardController<S>, export_path: PathBuf) -> Self {
        let mut app = Self {
            wizard,
            tier_index: 0,
            focus: DetailsField::Photo,
            photo_input: InputField::new("", "path to an image file"),
            name_input: InputField::new("", "your full name").with_max_chars(80),
            email_input: InputField::new("", "hello@avifolio.io").with_max_chars(120),
            request_input: InputField::new("", "anything we should know?").with_max_chars(280),
            confirm_action: ConfirmAction::Download,
            status_message: String::new(),
            export_path,
            loaded_photo_path: None,
        };
        app.sync_from_draft();
        app.status_message = if app.wizard.draft().is_pristine() {
            "🎉 Pick a ticket to get started.".to_string()
        } else {
            "📂 Restored your saved booking.".to_string()
        };
        app
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn highlighted_tier(&self) -> TicketType {
        TICKET_TIERS[self.tier_index % TICKET_TIERS.len()].ticket_type
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }
        match self.wizard.step() {
            WizardStep::Selection => self.handle_selection_input(key),
            WizardStep::Details => self.handle_details_input(key),
            WizardStep::Confirmation => self.handle_confirmation_input(key),
        }
    }

    fn handle_selection_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.move_tier(-1);
                InputResult::Continue
            }
            KeyCode::Right | KeyCode::Tab => {
                self.move_tier(1);
                InputResult::Continue
            }
            KeyCode::Char(' ') => {
                let tier = self.highlighted_tier();
                self.apply(|wizard| wizard.select_ticket_type(tier));
                self.status_message = format!("🎟️ {} selected.", tier);
                InputResult::Continue
            }
            KeyCode::Up | KeyCode::Char('+') => {
                self.step_count(1);
                InputResult::Continue
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.step_count(-1);
                InputResult::Continue
            }
            KeyCode::Char(c @ '1'..='5') => {
                let count = c as u8 - b'0';
                self.apply(|wizard| wizard.set_ticket_count(count));
                InputResult::Continue
            }
            KeyCode::Enter => {
                self.advance();
                InputResult::Continue
            }
            KeyCode::Esc => {
                self.cancel("🧹 Booking cleared.");
                InputResult::Continue
            }
            KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    fn handle_details_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.offset(1);
                InputResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.offset(-1);
                InputResult::Continue
            }
            KeyCode::Esc => {
                self.wizard.back();
                self.status_message = "↩️ Back to ticket selection.".to_string();
                InputResult::Continue
            }
            KeyCode::Enter if self.focus == DetailsField::Photo => {
                self.load_photo();
                InputResult::Continue
            }
            KeyCode::Enter => {
                self.advance();
                InputResult::Continue
            }
            _ => {
                self.edit_focused_field(key);
                InputResult::Continue
            }
        }
    }

    fn handle_confirmation_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_action = self.confirm_action.toggled();
                InputResult::Continue
            }
            KeyCode::Enter => match self.confirm_action {
                ConfirmAction::BookAnother => self.book_another(),
                ConfirmAction::Download => self.download(),
            },
            KeyCode::Char('b') => self.book_another(),
            KeyCode::Char('d') => self.download(),
            KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    fn edit_focused_field(&mut self, key: KeyEvent) {
        let focus = self.focus;
        let field = match focus {
            DetailsField::Photo => &mut self.photo_input,
            DetailsField::Name => &mut self.name_input,
            DetailsField::Email => &mut self.email_input,
            DetailsField::SpecialRequest => &mut self.request_input,
        };
        if !field.handle_key(key) {
            return;
        }
        let value = field.value().to_string();
        match focus {
            // The photo is read on Enter; emptying the path drops it.
            DetailsField::Photo => {
                if value.trim().is_empty() && self.wizard.draft().attendee_photo.is_some() {
                    self.apply(|wizard| wizard.clear_attendee_photo());
                    self.loaded_photo_path = None;
                    self.status_message = "🗑️ Photo removed.".to_string();
                }
            }
            DetailsField::Name => self.apply(|wizard| wizard.set_attendee_name(value)),
            DetailsField::Email => self.apply(|wizard| wizard.set_attendee_email(value)),
            DetailsField::SpecialRequest => {
                self.apply(|wizard| wizard.set_special_request(value))
            }
        }
    }

    fn load_photo(&mut self) -> bool {
        let raw = self.photo_input.value().trim().to_string();
        match self.wizard.load_attendee_photo(Path::new(&raw)) {
            Ok(()) => {
                self.status_message = format!("🖼️ Photo uploaded: {}", raw);
                self.loaded_photo_path = Some(raw);
                self.focus = DetailsField::Name;
                true
            }
            Err(err) => {
                log::warn!("Photo upload failed: {:#}", err);
                self.status_message = format!("❌ {:#}", err);
                false
            }
        }
    }

    fn advance(&mut self) {
        // A typed path that differs from the attached photo is loaded on submit.
        if self.wizard.step() == WizardStep::Details
            && self.photo_path_pending()
            && !self.load_photo()
        {
            return;
        }
        match self.wizard.next() {
            Ok(WizardStep::Details) => {
                self.focus = DetailsField::Photo;
                self.status_message = "🧑 Tell us about the attendee.".to_string();
            }
            Ok(WizardStep::Confirmation) => {
                self.confirm_action = ConfirmAction::Download;
                self.status_message = "✅ Your ticket is booked!".to_string();
            }
            Ok(WizardStep::Selection) => {}
            Err(err) => {
                self.status_message = format!("❌ {}", err);
            }
        }
    }

    fn photo_path_pending(&self) -> bool {
        let typed = self.photo_input.value().trim();
        !typed.is_empty() && self.loaded_photo_path.as_deref() != Some(typed)
    }

    fn book_another(&mut self) -> InputResult {
        self.cancel("🎟️ Ready for another booking.");
        InputResult::Continue
    }

    fn download(&mut self) -> InputResult {
        let path = self.export_path.clone();
        match self.wizard.export_ticket(&path) {
            Ok(written) => {
                self.sync_from_draft();
                self.status_message = format!("✅ Ticket saved to {}", written.display());
                InputResult::Exported(written)
            }
            Err(err) => {
                log::error!("Ticket export failed: {:#}", err);
                self.status_message = format!("❌ {:#}", err);
                InputResult::Continue
            }
        }
    }

    fn cancel(&mut self, message: &str) {
        match self.wizard.cancel() {
            Ok(()) => self.status_message = message.to_string(),
            Err(err) => {
                log::error!("Cancel failed: {:#}", err);
                self.status_message = format!("❌ {:#}", err);
            }
        }
        self.sync_from_draft();
    }

    fn move_tier(&mut self, delta: isize) {
        let len = TICKET_TIERS.len() as isize;
        self.tier_index = (self.tier_index as isize + delta).rem_euclid(len) as usize;
    }

    fn step_count(&mut self, delta: i8) {
        let current = self.wizard.draft().ticket_count as i16;
        let next = (current + i16::from(delta))
            .clamp(i16::from(MIN_SELECTABLE_COUNT), i16::from(MAX_TICKET_COUNT))
            as u8;
        if i16::from(next) != current {
            self.apply(|wizard| wizard.set_ticket_count(next));
        }
    }

    /// Run a controller mutation, surfacing failures on the status line.
    fn apply<F>(&mut self, mutation: F)
    where
        F: FnOnce(&mut WizardController<S>) -> anyhow::Result<()>,
    {
        if let Err(err) = mutation(&mut self.wizard) {
            log::error!("Draft update failed: {:#}", err);
            self.status_message = format!("❌ {:#}", err);
        }
    }

    /// Point inputs and highlights at the controller's draft.
    fn sync_from_draft(&mut self) {
        let draft = self.wizard.draft();
        self.tier_index = draft
            .ticket_type
            .and_then(|t| TICKET_TIERS.iter().position(|tier| tier.ticket_type == t))
            .unwrap_or(0);
        self.loaded_photo_path = draft.attendee_photo.as_ref().map(|p| p.file_name.clone());
        self.photo_input
            .set_value(self.loaded_photo_path.clone().unwrap_or_default());
        self.name_input.set_value(draft.attendee_name.clone());
        self.email_input.set_value(draft.attendee_email.clone());
        self.request_input.set_value(draft.special_request.clone());
        self.focus = DetailsField::Photo;
        self.confirm_action = ConfirmAction::Download;
    }
}
