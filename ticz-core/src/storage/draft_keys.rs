//! Mapping between `BookingDraft` fields and store keys.

use super::DraftStore;
use crate::booking::{AttendeePhoto, BookingDraft, TicketType, MAX_TICKET_COUNT};
use anyhow::Result;

pub mod keys {
    pub const TICKET_TYPE: &str = "selectedTicketType";
    pub const TICKET_COUNT: &str = "numberOfTickets";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const SPECIAL_REQUEST: &str = "specialRequest";
    pub const PHOTO_NAME: &str = "profilePhotoName";
    pub const PHOTO_DATA_URL: &str = "profilePhotoDataUrl";
}

/// Write every draft field in one batch.
pub fn save_draft<S: DraftStore + ?Sized>(store: &mut S, draft: &BookingDraft) -> Result<()> {
    let ticket_type = draft
        .ticket_type
        .map(|t| t.label().to_string())
        .unwrap_or_default();
    let (photo_name, photo_url) = match &draft.attendee_photo {
        Some(photo) => (Some(photo.file_name.clone()), Some(photo.data_url())),
        None => (None, None),
    };
    store.apply(&[
        (keys::TICKET_TYPE, Some(ticket_type)),
        (keys::TICKET_COUNT, Some(draft.ticket_count.to_string())),
        (keys::NAME, Some(draft.attendee_name.clone())),
        (keys::EMAIL, Some(draft.attendee_email.clone())),
        (keys::SPECIAL_REQUEST, Some(draft.special_request.clone())),
        (keys::PHOTO_NAME, photo_name),
        (keys::PHOTO_DATA_URL, photo_url),
    ])
}

/// Rebuild a draft from the store. Missing or empty values keep their
/// defaults; values that do not parse are skipped with a warning.
pub fn load_draft<S: DraftStore + ?Sized>(store: &S) -> BookingDraft {
    let mut draft = BookingDraft::default();
    let saved = |key: &str| store.get_item(key).filter(|value| !value.is_empty());

    if let Some(raw) = saved(keys::TICKET_TYPE) {
        match raw.parse::<TicketType>() {
            Ok(ticket_type) => draft.ticket_type = Some(ticket_type),
            Err(err) => log::warn!("Ignoring saved ticket type: {}", err),
        }
    }
    if let Some(raw) = saved(keys::TICKET_COUNT) {
        match raw.trim().parse::<u8>() {
            Ok(count) if count <= MAX_TICKET_COUNT => draft.ticket_count = count,
            _ => log::warn!("Ignoring saved ticket count: {:?}", raw),
        }
    }
    if let Some(name) = saved(keys::NAME) {
        draft.attendee_name = name;
    }
    if let Some(email) = saved(keys::EMAIL) {
        draft.attendee_email = email;
    }
    if let Some(request) = saved(keys::SPECIAL_REQUEST) {
        draft.special_request = request;
    }
    if let Some(url) = saved(keys::PHOTO_DATA_URL) {
        let file_name = saved(keys::PHOTO_NAME).unwrap_or_else(|| "photo".to_string());
        match AttendeePhoto::from_data_url(&file_name, &url) {
            Ok(photo) => draft.attendee_photo = Some(photo),
            Err(err) => log::warn!("Ignoring saved photo {}: {:#}", file_name, err),
        }
    }

    draft
}
