use super::error::ValidationError;
use super::upload::UploadedFile;
use crate::config::{ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES};

/// Check an upload against the picker's allow-list and size limits.
pub fn validate_upload(file: &UploadedFile) -> Result<(), ValidationError> {
    if file.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if file.size_bytes == 0 {
        return Err(ValidationError::EmptyFile);
    }

    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge {
            size_mb: file.size_bytes as f64 / (1024.0 * 1024.0),
            max_mb: MAX_UPLOAD_BYTES / (1024 * 1024),
        });
    }

    match file.extension() {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(ValidationError::UnsupportedExtension(ext)),
        None => Err(ValidationError::UnsupportedExtension(String::new())),
    }
}
