//! Read-only view of a saved draft for `ticz show`.

use super::BookingDraft;
use crate::wizard::validation::{validate_details, validate_selection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub ticket_type: Option<String>,
    pub ticket_count: u8,
    pub photo: Option<String>,
    pub name: String,
    pub email: String,
    pub special_request: String,
    /// Both transitions would be accepted.
    pub ready: bool,
    /// First rule the draft still breaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl DraftSummary {
    pub fn from_draft(draft: &BookingDraft) -> Self {
        let problem = validate_selection(draft)
            .and_then(|_| validate_details(draft))
            .err()
            .map(|err| err.to_string());
        Self {
            ticket_type: draft.ticket_type.map(|t| t.label().to_string()),
            ticket_count: draft.ticket_count,
            photo: draft.attendee_photo.as_ref().map(|p| p.file_name.clone()),
            name: draft.attendee_name.trim().to_string(),
            email: draft.attendee_email.trim().to_string(),
            special_request: draft.special_request.trim().to_string(),
            ready: problem.is_none(),
            problem,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        fn or_dash(value: Option<&str>) -> &str {
            match value {
                Some(v) if !v.is_empty() => v,
                _ => "-",
            }
        }
        vec![
            "📋 Saved booking".to_string(),
            format!("Ticket Type: {}", or_dash(self.ticket_type.as_deref())),
            format!("Number of Tickets: {}", self.ticket_count),
            format!("Photo: {}", or_dash(self.photo.as_deref())),
            format!("Name: {}", or_dash(Some(&self.name))),
            format!("Email: {}", or_dash(Some(&self.email))),
            format!("Special Request: {}", or_dash(Some(&self.special_request))),
        ]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
