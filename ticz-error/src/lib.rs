use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a wizard transition or a field update is rejected.
///
/// The `Display` text is what the attendee sees under the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a ticket type and number of tickets.")]
    MissingSelection,

    #[error("Please fill in your name and email and upload a profile photo.")]
    MissingAttendeeDetails,

    #[error("Please enter a valid email with @ symbol.")]
    InvalidEmail,

    #[error("You can book between 0 and {max} tickets (got {count}).")]
    TicketCountOutOfRange { count: u8, max: u8 },

    #[error("Unknown ticket type: {0}")]
    UnknownTicketType(String),

    #[error("Only image files can be uploaded: {0}")]
    UnsupportedPhoto(String),

    #[error("Photo file is empty: {0}")]
    EmptyPhoto(String),
}

#[derive(Error, Debug)]
pub enum TiczError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("The ticket can only be downloaded once the booking is confirmed.")]
    NotConfirmed,

    #[error("Corrupt draft storage: {0}")]
    CorruptStorage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_copy() {
        assert_eq!(
            ValidationError::MissingSelection.to_string(),
            "Please select a ticket type and number of tickets."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email with @ symbol."
        );
    }

    #[test]
    fn validation_error_converts_into_ticz_error() {
        let err: TiczError = ValidationError::MissingAttendeeDetails.into();
        assert!(matches!(
            err,
            TiczError::Validation(ValidationError::MissingAttendeeDetails)
        ));
    }
}
