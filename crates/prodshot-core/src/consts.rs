use std::time::Duration;

/// Styling instruction pre-filled in the prompt editor and restored on start over.
pub const DEFAULT_PROMPT: &str =
    "Place this product on a white marble table with soft, natural lighting.";

/// Environment variable holding the generation API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Image-capable Gemini model used when settings don't name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Base URL of the Generative Language REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Prefix prepended to the original file name when saving a result.
pub const DOWNLOAD_PREFIX: &str = "professional_";

/// Name used in the download file name when the original has none.
pub const FALLBACK_DOWNLOAD_STEM: &str = "photo";

/// Display name given to every generated payload.
pub const GENERATED_IMAGE_NAME: &str = "generated_product_photo.png";

/// Failure message when the model answers without an inline image.
pub const NO_IMAGE_MESSAGE: &str =
    "AI did not return an image. Please try again with a different image or prompt.";

/// Media type reported for files whose type can't be determined.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Messages cycled by the busy indicator while a request is pending.
pub const BUSY_MESSAGES: [&str; 6] = [
    "Applying studio lighting...",
    "Adjusting the background...",
    "Sharpening product details...",
    "Perfecting the colors...",
    "The AI is thinking hard...",
    "Almost done...",
];

/// How long each busy message stays on screen.
pub const BUSY_MESSAGE_INTERVAL: Duration = Duration::from_millis(2500);

/// Upper bound on API error bodies carried into user-facing messages.
pub const MAX_ERROR_BODY_CHARS: usize = 500;
