use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::client::{GenerationClient, GenerationOutcome};
use crate::config::{Credential, Settings};
use crate::consts::MAX_ERROR_BODY_CHARS;
use crate::error::{GenerationError, Result};
use crate::payload::ImagePayload;
use crate::prompt::compose_instruction;

/// Blocking client for Gemini's `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    credential: Credential,
    settings: Settings,
}

impl GeminiClient {
    pub fn new(settings: Settings, credential: Credential) -> Result<Self> {
        // The request runs until the service answers.
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(GenerationError::from)?;

        Ok(Self {
            http,
            credential,
            settings,
        })
    }

    /// Build a client with the key from `API_KEY`; fails if it is unset.
    pub fn from_env(settings: Settings) -> Result<Self> {
        Self::new(settings, Credential::from_env()?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn send(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> std::result::Result<GenerationOutcome, GenerationError> {
        let body = GeminiRequest::new(image, &compose_instruction(prompt));
        let url = self.settings.generate_url();

        tracing::debug!(%url, image = ?image, "sending generation request");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.credential.expose())
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        parse_response(&text)
    }
}

impl GenerationClient for GeminiClient {
    fn generate(&self, image: &ImagePayload, prompt: &str) -> Result<GenerationOutcome> {
        let start = Instant::now();
        match self.send(image, prompt) {
            Ok(outcome) => {
                tracing::info!(
                    model = %self.settings.model,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    media_type = outcome.image.media_type(),
                    len = outcome.image.len(),
                    "generation succeeded"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(model = %self.settings.model, "error generating professional photo: {e}");
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &str {
        &self.settings.model
    }
}

/// Interpret a `generateContent` response body.
///
/// Only the first candidate is considered. Its first inline-image part is
/// the result; every text part is collected into the advisory.
pub fn parse_response(body: &str) -> std::result::Result<GenerationOutcome, GenerationError> {
    let response: GeminiResponse = serde_json::from_str(body)?;

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(GenerationError::Blocked(reason));
    }

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    let mut image = None;
    let mut texts = Vec::new();
    for part in parts {
        if let Some(inline) = part.inline_data {
            if image.is_none() {
                image = Some(inline);
            }
        } else if let Some(text) = part.text.filter(|t| !t.trim().is_empty()) {
            texts.push(text);
        }
    }

    let advisory = (!texts.is_empty()).then(|| texts.join("\n"));
    let Some(inline) = image else {
        if let Some(ref text) = advisory {
            tracing::warn!("model answered without an image: {text}");
        }
        return Err(GenerationError::NoImage { advisory });
    };

    Ok(GenerationOutcome {
        image: ImagePayload::generated(&inline.data, inline.mime_type)?,
        advisory,
    })
}

/// Pull the human-readable message out of an API error body.
fn api_error_message(body: &str) -> String {
    let message = serde_json::from_str::<GeminiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    if message.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = message.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{truncated}...")
    } else {
        message
    }
}

// Request/Response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiRequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiRequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiConfig {
    response_modalities: Vec<&'static str>,
}

impl GeminiRequest {
    fn new(image: &ImagePayload, instruction: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiRequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: image.media_type().to_string(),
                            data: image.to_base64(),
                        },
                    },
                    GeminiRequestPart::Text {
                        text: instruction.to_string(),
                    },
                ],
            }],
            generation_config: GeminiConfig {
                response_modalities: vec!["IMAGE", "TEXT"],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPartResponse {
    #[serde(default)]
    inline_data: Option<InlineData>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}
