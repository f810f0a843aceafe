//! Root state holder for one editing session.
//!
//! Front ends never mutate fields directly. Each user action or worker
//! result goes through one of the update methods below, and the front end
//! re-renders from the accessors afterwards.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::GenerationOutcome;
use crate::consts::DEFAULT_PROMPT;
use crate::error::Result;
use crate::io::download::{download_file_name, Download};
use crate::payload::ImagePayload;

/// Phase of the current attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppStatus {
    #[default]
    Idle,
    Uploading,
    Processing,
    Success,
    Error,
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Uploading => write!(f, "Uploading"),
            Self::Processing => write!(f, "Processing"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

// Attempt ids are unique for the process, so a reset session never reuses one.
static NEXT_JOB_ID: AtomicU64 = AtomicU64::new(1);

/// Work handed to whoever runs the generation client.
#[derive(Clone, Debug)]
pub struct GenerationJob {
    /// Pass back to [`Session::generation_finished`] with the result.
    pub id: u64,
    pub image: ImagePayload,
    pub prompt: String,
}

#[derive(Clone, Debug)]
pub struct Session {
    status: AppStatus,
    original: Option<ImagePayload>,
    generated: Option<ImagePayload>,
    prompt: String,
    default_prompt: String,
    error: Option<String>,
    advisory: Option<String>,
    pending_job: Option<u64>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl Session {
    pub fn new(default_prompt: impl Into<String>) -> Self {
        let default_prompt = default_prompt.into();
        Self {
            status: AppStatus::Idle,
            original: None,
            generated: None,
            prompt: default_prompt.clone(),
            default_prompt,
            error: None,
            advisory: None,
            pending_job: None,
        }
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    pub fn original(&self) -> Option<&ImagePayload> {
        self.original.as_ref()
    }

    pub fn generated(&self) -> Option<&ImagePayload> {
        self.generated.as_ref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn default_prompt(&self) -> &str {
        &self.default_prompt
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.status == AppStatus::Processing
    }

    /// Id of the attempt whose result is awaited.
    pub fn pending_job(&self) -> Option<u64> {
        self.pending_job
    }

    /// The generate control is enabled only with an image and nothing in flight
    /// or being read.
    pub fn can_generate(&self) -> bool {
        self.original.is_some()
            && !matches!(self.status, AppStatus::Processing | AppStatus::Uploading)
    }

    /// Uploads are refused while a request is pending or another upload is being read.
    pub fn can_upload(&self) -> bool {
        !matches!(self.status, AppStatus::Processing | AppStatus::Uploading)
    }

    pub fn can_download(&self) -> bool {
        self.status == AppStatus::Success && self.generated.is_some()
    }

    /// A file passed validation and is being read. Returns `false` if uploads
    /// are currently refused.
    pub fn begin_upload(&mut self) -> bool {
        if !self.can_upload() {
            return false;
        }
        self.status = AppStatus::Uploading;
        true
    }

    /// The pending read failed. Leaves everything as it was before the upload.
    pub fn upload_failed(&mut self) {
        if self.status == AppStatus::Uploading {
            self.status = self.resting_status();
        }
    }

    /// A new original image replaces the old one and clears any result.
    pub fn image_uploaded(&mut self, image: ImagePayload) {
        if self.is_processing() {
            tracing::warn!("ignoring upload while a request is pending");
            return;
        }
        tracing::debug!(image = ?image, "original image set");
        self.original = Some(image);
        self.generated = None;
        self.error = None;
        self.advisory = None;
        self.status = AppStatus::Idle;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        if !self.is_processing() {
            self.prompt = prompt.into();
        }
    }

    /// Start an attempt. `None` when there is no image or one is already running.
    pub fn request_generation(&mut self) -> Option<GenerationJob> {
        if !self.can_generate() {
            return None;
        }
        let image = self.original.clone()?;

        let id = NEXT_JOB_ID.fetch_add(1, Ordering::Relaxed);
        self.status = AppStatus::Processing;
        self.pending_job = Some(id);
        self.error = None;
        self.generated = None;
        self.advisory = None;

        Some(GenerationJob {
            id,
            image,
            prompt: self.prompt.clone(),
        })
    }

    /// Apply the client's answer to the pending attempt. Results for any
    /// other attempt (one abandoned by start over) are dropped.
    pub fn generation_finished(&mut self, job_id: u64, result: Result<GenerationOutcome>) {
        if !self.is_processing() || self.pending_job != Some(job_id) {
            tracing::warn!(
                status = %self.status,
                job_id,
                pending = ?self.pending_job,
                "dropping stale generation result"
            );
            return;
        }
        self.pending_job = None;

        match result {
            Ok(outcome) => {
                self.generated = Some(outcome.image);
                self.advisory = outcome.advisory;
                self.status = AppStatus::Success;
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(if message.trim().is_empty() {
                    "An unknown error occurred.".to_string()
                } else {
                    message
                });
                self.status = AppStatus::Error;
            }
        }
    }

    /// Back to a blank session, prompt included.
    pub fn start_over(&mut self) {
        *self = Self::new(std::mem::take(&mut self.default_prompt));
    }

    /// The result as a file, named after the original. Only after a success.
    pub fn download(&self) -> Option<Download> {
        if !self.can_download() {
            return None;
        }
        let image = self.generated.clone()?;
        Some(Download {
            file_name: download_file_name(self.original.as_ref().map(|o| o.name())),
            image,
        })
    }

    /// Status to render the result area with. While a replacement file is
    /// being read this is the status before the read started.
    pub fn settled_status(&self) -> AppStatus {
        if self.status != AppStatus::Uploading {
            return self.status;
        }
        self.resting_status()
    }

    fn resting_status(&self) -> AppStatus {
        if self.error.is_some() {
            AppStatus::Error
        } else if self.generated.is_some() {
            AppStatus::Success
        } else {
            AppStatus::Idle
        }
    }
}
