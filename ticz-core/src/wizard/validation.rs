//! Per-step guard rails for wizard transitions.

use crate::booking::{BookingDraft, WizardStep, MAX_TICKET_COUNT};
use ticz_error::{ValidationError, ValidationResult};

/// Selection → Details requires a ticket type and at least one ticket.
pub fn validate_selection(draft: &BookingDraft) -> ValidationResult<()> {
    if draft.ticket_type.is_none() || draft.ticket_count == 0 {
        return Err(ValidationError::MissingSelection);
    }
    validate_ticket_count(draft.ticket_count)
}

/// Details → Confirmation requires photo, name and an email containing '@'.
pub fn validate_details(draft: &BookingDraft) -> ValidationResult<()> {
    let name = draft.attendee_name.trim();
    let email = draft.attendee_email.trim();
    if draft.attendee_photo.is_none() || name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingAttendeeDetails);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_ticket_count(count: u8) -> ValidationResult<()> {
    if count > MAX_TICKET_COUNT {
        return Err(ValidationError::TicketCountOutOfRange {
            count,
            max: MAX_TICKET_COUNT,
        });
    }
    Ok(())
}

/// Rule guarding the transition out of `step`.
pub fn validate_leaving(step: WizardStep, draft: &BookingDraft) -> ValidationResult<()> {
    match step {
        WizardStep::Selection => validate_selection(draft),
        WizardStep::Details => validate_details(draft),
        WizardStep::Confirmation => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{AttendeePhoto, TicketType};

    fn details_draft() -> BookingDraft {
        BookingDraft {
            ticket_type: Some(TicketType::Regular),
            ticket_count: 1,
            attendee_photo: Some(AttendeePhoto::new("a.png", "image/png", vec![1])),
            attendee_name: "Ada".to_string(),
            attendee_email: "ada@example.com".to_string(),
            special_request: String::new(),
        }
    }

    #[test]
    fn selection_needs_type_and_positive_count() {
        let mut draft = BookingDraft::default();
        assert_eq!(validate_selection(&draft), Err(ValidationError::MissingSelection));

        draft.ticket_type = Some(TicketType::Vip);
        assert_eq!(validate_selection(&draft), Ok(()));

        draft.ticket_count = 0;
        assert_eq!(validate_selection(&draft), Err(ValidationError::MissingSelection));
    }

    #[test]
    fn details_need_photo_name_and_email() {
        assert_eq!(validate_details(&details_draft()), Ok(()));

        let mut no_photo = details_draft();
        no_photo.attendee_photo = None;
        assert_eq!(
            validate_details(&no_photo),
            Err(ValidationError::MissingAttendeeDetails)
        );

        let mut blank_name = details_draft();
        blank_name.attendee_name = "   ".to_string();
        assert_eq!(
            validate_details(&blank_name),
            Err(ValidationError::MissingAttendeeDetails)
        );

        let mut no_email = details_draft();
        no_email.attendee_email.clear();
        assert_eq!(
            validate_details(&no_email),
            Err(ValidationError::MissingAttendeeDetails)
        );

        let mut blank_email = details_draft();
        blank_email.attendee_email = " \t ".to_string();
        assert_eq!(
            validate_details(&blank_email),
            Err(ValidationError::MissingAttendeeDetails)
        );
    }

    #[test]
    fn details_reject_email_without_at() {
        let mut draft = details_draft();
        draft.attendee_email = "ada.example.com".to_string();
        assert_eq!(validate_details(&draft), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn special_request_is_optional() {
        let draft = details_draft();
        assert!(draft.special_request.is_empty());
        assert_eq!(validate_leaving(WizardStep::Details, &draft), Ok(()));
    }

    #[test]
    fn ticket_count_caps_at_five() {
        assert_eq!(validate_ticket_count(5), Ok(()));
        assert_eq!(
            validate_ticket_count(6),
            Err(ValidationError::TicketCountOutOfRange { count: 6, max: 5 })
        );
    }
}
