//! Photo-journal upload validation and object-key naming.
//!
//! Uploads are validated here before any storage or captioning call is
//! made; a rejected file never leaves the process.

use image::ImageFormat;
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// File extensions accepted for journal photos.
pub const ALLOWED_PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Maximum accepted photo payload (10 MiB).
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Length of the random suffix in generated object keys.
const KEY_SUFFIX_LENGTH: usize = 8;

/// Raster formats the sniffer accepts, matching [`ALLOWED_PHOTO_EXTENSIONS`].
const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Extract the lowercased extension from a filename.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Validate a journal photo upload.
///
/// Checks, in order: the declared content type is `image/*`, the filename
/// carries an allowed extension, the payload is non-empty and within
/// [`MAX_PHOTO_BYTES`], and the leading bytes sniff as a known raster
/// format. Declared metadata alone is not trusted.
pub fn validate_photo(
    content_type: Option<&str>,
    filename: &str,
    bytes: &[u8],
) -> Result<(), CoreError> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => {}
        _ => {
            return Err(CoreError::Validation(
                "Please select an image file".to_string(),
            ));
        }
    }

    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::Validation(format!("Filename '{filename}' has no extension"))
    })?;
    if !ALLOWED_PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format '.{ext}'. Supported: .jpg, .jpeg, .png, .webp, .gif"
        )));
    }

    if bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".to_string()));
    }
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(CoreError::Validation(format!(
            "Photo exceeds the {} MiB limit",
            MAX_PHOTO_BYTES / (1024 * 1024)
        )));
    }

    let format = image::guess_format(bytes).map_err(|_| {
        CoreError::Validation("File content is not a recognized image".to_string())
    })?;
    if !ALLOWED_FORMATS.contains(&format) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format {format:?}"
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Object-key naming
// ---------------------------------------------------------------------------

/// Build an object key from its parts.
///
/// Convention: `{unix_millis}-{suffix}.{extension}`
pub fn photo_object_key(extension: &str, unix_millis: i64, suffix: &str) -> String {
    format!("{unix_millis}-{suffix}.{extension}")
}

/// Generate a fresh object key for an uploaded photo.
///
/// Uses the current time and a random 8-character alphanumeric suffix so
/// concurrent uploads of identically named files never collide.
pub fn generate_photo_object_key(filename: &str) -> Result<String, CoreError> {
    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::Validation(format!("Filename '{filename}' has no extension"))
    })?;
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(KEY_SUFFIX_LENGTH)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    Ok(photo_object_key(
        &ext,
        chrono::Utc::now().timestamp_millis(),
        &suffix,
    ))
}
