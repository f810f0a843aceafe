use std::path::PathBuf;

use prodshot_core::client::GenerationOutcome;
use prodshot_core::config::Settings;
use prodshot_core::error::Result;
use prodshot_core::io::download::Download;
use prodshot_core::payload::ImagePayload;
use prodshot_core::session::GenerationJob;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read a picked or dropped file that already passed the media type check.
    ReadUpload { path: PathBuf },

    /// Decode an upload that arrived with its bytes (drag-and-drop without a path).
    PreviewUpload { image: ImagePayload },

    /// Send the single generation request.
    Generate { job: GenerationJob },

    /// Write the generated image to disk.
    SaveDownload { download: Download, path: PathBuf },

    /// Rebuild the client with imported settings.
    ApplySettings { settings: Settings },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Path chosen in the open dialog; validated on the UI thread.
    FilePicked {
        path: PathBuf,
    },

    Uploaded {
        image: ImagePayload,
        preview: Option<egui::ColorImage>,
    },

    /// The file could not be read; carries the blocking notice text.
    UploadFailed {
        notice: String,
        detail: String,
    },

    GenerationFinished {
        job_id: u64,
        result: Result<GenerationOutcome>,
        preview: Option<egui::ColorImage>,
    },

    DownloadSaved {
        path: PathBuf,
    },

    /// Settings picked in the import dialog.
    SettingsImported {
        settings: Settings,
    },

    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
