//! Attendee profile photo: loading from disk and data URL encoding.

use crate::errors::{Result, TiczError, ValidationError};
use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::fs;
use std::path::Path;

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
];

#[derive(Clone, PartialEq, Eq)]
pub struct AttendeePhoto {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

// Keep image bytes out of debug logs.
impl fmt::Debug for AttendeePhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttendeePhoto")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl AttendeePhoto {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn from_data_url(file_name: &str, data_url: &str) -> Result<Self> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| TiczError::CorruptStorage("photo is not a data URL".to_string()))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| TiczError::CorruptStorage("photo data URL is not base64".to_string()))?;
        if !mime_type.starts_with("image/") {
            return Err(ValidationError::UnsupportedPhoto(file_name.to_string()).into());
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|err| TiczError::CorruptStorage(err.to_string()))?;
        Ok(Self::new(file_name, mime_type, bytes))
    }
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, mime)| *mime)
}

/// Read an image file chosen by the attendee.
pub fn load_photo(path: &Path) -> Result<AttendeePhoto> {
    let display = path.display().to_string();
    if path.as_os_str().is_empty() {
        anyhow::bail!("Photo path is required.");
    }
    let mime_type =
        mime_for_path(path).ok_or_else(|| ValidationError::UnsupportedPhoto(display.clone()))?;
    if !path.is_file() {
        anyhow::bail!("Photo file not found: {}", display);
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read photo: {}", display))?;
    if bytes.is_empty() {
        return Err(ValidationError::EmptyPhoto(display).into());
    }
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("photo")
        .to_string();
    log::debug!("Loaded photo {} ({} bytes)", file_name, bytes.len());
    Ok(AttendeePhoto::new(file_name, mime_type, bytes))
}
