//! Boundary to the external image-generation service.

mod gemini;

pub use gemini::{parse_response, GeminiClient};

use crate::error::Result;
use crate::payload::ImagePayload;

/// What a successful generation hands back.
#[derive(Clone, Debug)]
pub struct GenerationOutcome {
    pub image: ImagePayload,
    /// Text the model returned alongside the image, if any.
    pub advisory: Option<String>,
}

/// Issues exactly one request per call: no retries, no timeout.
///
/// Every failure comes back as [`ProdshotError::Generation`], whose message
/// reads `Failed to generate photo: <cause>`.
///
/// [`ProdshotError::Generation`]: crate::error::ProdshotError::Generation
pub trait GenerationClient: Send + Sync {
    fn generate(&self, image: &ImagePayload, prompt: &str) -> Result<GenerationOutcome>;

    /// Short name for logs and summaries.
    fn name(&self) -> &str;
}
