//! The booked ticket: terminal preview and HTML export.

mod html;

pub use html::render_html;

use crate::booking::{AttendeePhoto, BookingDraft, TicketType};
use crate::event::{EventInfo, EVENT};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_TICKET_FILE_NAME: &str = "techember_fest_ticket.html";

/// Everything printed on a confirmed ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCard {
    pub event: EventInfo,
    pub ticket_type: TicketType,
    pub ticket_count: u8,
    pub attendee_name: String,
    pub attendee_email: String,
    pub special_request: String,
    pub photo: Option<AttendeePhoto>,
}

impl TicketCard {
    /// `None` until a ticket type has been chosen.
    pub fn from_draft(draft: &BookingDraft) -> Option<Self> {
        Some(Self {
            event: EVENT,
            ticket_type: draft.ticket_type?,
            ticket_count: draft.ticket_count,
            attendee_name: draft.attendee_name.trim().to_string(),
            attendee_email: draft.attendee_email.trim().to_string(),
            special_request: draft.special_request.trim().to_string(),
            photo: draft.attendee_photo.clone(),
        })
    }

    pub fn special_request_or_nil(&self) -> &str {
        if self.special_request.is_empty() {
            "Nil"
        } else {
            &self.special_request
        }
    }

    pub fn preview_lines(&self) -> Vec<String> {
        let photo = self
            .photo
            .as_ref()
            .map(|p| p.file_name.as_str())
            .unwrap_or("Not uploaded");
        vec![
            format!("🎟️ {}", self.event.name),
            format!("📅 {}", self.event.date),
            format!("📍 {}", self.event.location),
            format!("🖼️ Photo: {}", photo),
            "┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄".to_string(),
            format!("Name: {}", self.attendee_name),
            format!("Email: {}", self.attendee_email),
            format!("Ticket Type: {}", self.ticket_type),
            format!("Number of Tickets: {}", self.ticket_count),
            format!("Special Request: {}", self.special_request_or_nil()),
            "┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄".to_string(),
            "║▌║█║▌│║▌║▌█║▌║█║▌│║▌║▌█║".to_string(),
        ]
    }
}

pub fn write_ticket(card: &TicketCard, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create ticket directory: {}", parent.display()))?;
        }
    }
    fs::write(path, render_html(card))
        .with_context(|| format!("Failed to write ticket: {}", path.display()))
}
