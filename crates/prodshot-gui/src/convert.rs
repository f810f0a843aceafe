use prodshot_core::payload::ImagePayload;

/// Longest edge of an on-screen preview; larger images are shrunk for display only.
const MAX_PREVIEW_EDGE: u32 = 2048;

/// Decode an encoded payload into an egui ColorImage for display.
pub fn payload_to_color_image(payload: &ImagePayload) -> Option<egui::ColorImage> {
    let decoded = match image::load_from_memory(payload.bytes()) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!(name = payload.name(), "cannot preview image: {e}");
            return None;
        }
    };

    let decoded = if decoded.width() > MAX_PREVIEW_EDGE || decoded.height() > MAX_PREVIEW_EDGE {
        decoded.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
