use std::fs::File;
use std::io::Read;
use std::path::Path;

use image::ImageFormat;

use crate::consts::UNKNOWN_MEDIA_TYPE;

/// Number of leading bytes inspected when the extension is inconclusive.
const SNIFF_LEN: usize = 32;

/// Generic `image/*` check, no allow-list.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Media type implied by a file extension, if the extension is a known image format.
pub fn media_type_from_extension(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path).ok().map(|f| f.to_mime_type())
}

/// Media type implied by the magic bytes at the start of a buffer.
pub fn media_type_from_bytes(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|f| f.to_mime_type())
}

/// Resolve the media type of a file on disk.
///
/// The extension wins when it names an image format. Otherwise only the
/// first few bytes are read and sniffed; the rest of the file is untouched.
pub fn media_type_for_path(path: &Path) -> std::io::Result<&'static str> {
    if let Some(media_type) = media_type_from_extension(path) {
        return Ok(media_type);
    }

    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)?;

    Ok(media_type_from_bytes(&head).unwrap_or(UNKNOWN_MEDIA_TYPE))
}
