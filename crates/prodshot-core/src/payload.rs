use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::GENERATED_IMAGE_NAME;
use crate::error::GenerationError;

/// An encoded image held in memory: its bytes, media type and display name.
///
/// Payloads are immutable once built. The bytes live behind an `Arc`, so
/// cloning a payload into a worker command or a download is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Arc<[u8]>,
    media_type: String,
    name: String,
}

impl ImagePayload {
    pub fn new(bytes: impl Into<Arc<[u8]>>, media_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
            name: name.into(),
        }
    }

    /// Build a payload from base64 text, as returned inline by the API.
    pub fn from_base64(
        data: &str,
        media_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let bytes = STANDARD.decode(data.trim())?;
        Ok(Self::new(bytes, media_type, name))
    }

    /// A freshly generated result. The name is fixed regardless of encoding.
    pub fn generated(data: &str, media_type: impl Into<String>) -> Result<Self, GenerationError> {
        Self::from_base64(data, media_type, GENERATED_IMAGE_NAME)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:<media type>;base64,<data>` form of the payload.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.to_base64())
    }
}

// Debug output reports the byte count only.
impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
