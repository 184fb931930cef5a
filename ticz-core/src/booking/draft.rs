use crate::photo::AttendeePhoto;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use ticz_error::ValidationError;

/// Largest quantity offered by the ticket count selector.
pub const MAX_TICKET_COUNT: u8 = 5;
/// Count a fresh draft starts with (first option of the selector).
pub const DEFAULT_TICKET_COUNT: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TicketType {
    /// Regular Access (free)
    Regular,
    /// VIP Access
    Vip,
    /// VVIP Access
    Vvip,
}

impl TicketType {
    pub fn all() -> &'static [TicketType] {
        &[TicketType::Regular, TicketType::Vip, TicketType::Vvip]
    }

    /// Display label, also the persisted form.
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Regular => "Regular Access",
            TicketType::Vip => "VIP Access",
            TicketType::Vvip => "VVIP Access",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketType {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        TicketType::all()
            .iter()
            .copied()
            .find(|t| {
                t.label().eq_ignore_ascii_case(trimmed)
                    || short_name(*t).eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ValidationError::UnknownTicketType(trimmed.to_string()))
    }
}

fn short_name(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Regular => "regular",
        TicketType::Vip => "vip",
        TicketType::Vvip => "vvip",
    }
}

/// The in-progress, unsubmitted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub ticket_type: Option<TicketType>,
    pub ticket_count: u8,
    pub attendee_photo: Option<AttendeePhoto>,
    pub attendee_name: String,
    pub attendee_email: String,
    pub special_request: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            ticket_type: None,
            ticket_count: DEFAULT_TICKET_COUNT,
            attendee_photo: None,
            attendee_name: String::new(),
            attendee_email: String::new(),
            special_request: String::new(),
        }
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been entered beyond the defaults.
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_type_parses_labels_and_short_names() {
        assert_eq!("VIP Access".parse::<TicketType>(), Ok(TicketType::Vip));
        assert_eq!("vvip".parse::<TicketType>(), Ok(TicketType::Vvip));
        assert_eq!(" Regular ".parse::<TicketType>(), Ok(TicketType::Regular));
    }

    #[test]
    fn ticket_type_rejects_unknown_names() {
        assert_eq!(
            "Backstage".parse::<TicketType>(),
            Err(ValidationError::UnknownTicketType("Backstage".to_string()))
        );
    }

    #[test]
    fn fresh_draft_has_no_ticket_type_and_one_ticket() {
        let draft = BookingDraft::new();
        assert!(draft.ticket_type.is_none());
        assert_eq!(draft.ticket_count, 1);
        assert!(draft.is_pristine());
    }
}
