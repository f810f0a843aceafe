use thiserror::Error;

use crate::consts::NO_IMAGE_MESSAGE;

#[derive(Error, Debug)]
pub enum ProdshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("{env} environment variable is not set.")]
    MissingCredential { env: &'static str },

    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    #[error("Failed to generate photo: {0}")]
    Generation(#[from] GenerationError),
}

/// Rejections raised while accepting a file from the user.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("{name} is not an image (media type {media_type})")]
    NotAnImage { name: String, media_type: String },

    #[error("Failed to read {name}: {source}")]
    Unreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl UploadError {
    /// Blocking notice shown to the user. Both variants leave state untouched.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::NotAnImage { .. } => "Please upload an image file.",
            Self::Unreadable { .. } => "Could not process file. Please try another image.",
        }
    }
}

/// Failures of the single outbound generation request.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("{}", NO_IMAGE_MESSAGE)]
    NoImage { advisory: Option<String> },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid image data: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, ProdshotError>;
