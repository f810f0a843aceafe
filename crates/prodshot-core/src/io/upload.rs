use std::path::Path;
use std::sync::Arc;

use crate::error::UploadError;
use crate::io::media::{is_image_media_type, media_type_for_path};
use crate::payload::ImagePayload;

/// File name shown for a path, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Accept a file picked or dropped by the user.
///
/// The media type is checked before the file is read; a non-image is
/// rejected without loading its contents. The whole file is then read in
/// one pass.
pub fn load_upload(path: &Path) -> Result<ImagePayload, UploadError> {
    let name = display_name(path);

    let media_type = media_type_for_path(path).map_err(|source| UploadError::Unreadable {
        name: name.clone(),
        source,
    })?;
    if !is_image_media_type(media_type) {
        tracing::debug!(%name, media_type, "rejected non-image upload");
        return Err(UploadError::NotAnImage {
            name,
            media_type: media_type.to_string(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| UploadError::Unreadable {
        name: name.clone(),
        source,
    })?;
    tracing::info!(%name, media_type, len = bytes.len(), "image uploaded");
    Ok(ImagePayload::new(bytes, media_type, name))
}

/// Quick check run before a read is queued.
///
/// Rejects only a file that exists and is known not to be an image. Missing
/// or unreadable files pass, so the read reports them as unreadable.
pub fn screen_upload(path: &Path) -> Result<(), UploadError> {
    match media_type_for_path(path) {
        Ok(media_type) if !is_image_media_type(media_type) && path.exists() => {
            Err(UploadError::NotAnImage {
                name: display_name(path),
                media_type: media_type.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Accept an upload whose contents are already in memory.
pub fn payload_from_bytes(
    name: &str,
    media_type: &str,
    bytes: impl Into<Arc<[u8]>>,
) -> Result<ImagePayload, UploadError> {
    if !is_image_media_type(media_type) {
        return Err(UploadError::NotAnImage {
            name: name.to_string(),
            media_type: media_type.to_string(),
        });
    }
    Ok(ImagePayload::new(bytes, media_type, name))
}
