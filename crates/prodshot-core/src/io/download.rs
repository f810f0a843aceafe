use std::path::{Path, PathBuf};

use crate::consts::{DOWNLOAD_PREFIX, FALLBACK_DOWNLOAD_STEM};
use crate::error::Result;
use crate::payload::ImagePayload;

/// A generated image ready to be written out under its suggested name.
#[derive(Clone, Debug)]
pub struct Download {
    pub file_name: String,
    pub image: ImagePayload,
}

impl Download {
    pub fn bytes(&self) -> &[u8] {
        self.image.bytes()
    }
}

/// `professional_<original name>.png`, whatever the actual encoding.
///
/// The original name keeps its own extension, so `mug.jpg` becomes
/// `professional_mug.jpg.png`.
pub fn download_file_name(original_name: Option<&str>) -> String {
    let stem = original_name
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_DOWNLOAD_STEM);
    format!("{DOWNLOAD_PREFIX}{stem}.png")
}

/// Where a download lands when the user only names a directory.
pub fn download_path(dir: &Path, download: &Download) -> PathBuf {
    dir.join(&download.file_name)
}

/// Write the download's bytes to `path`.
pub fn save_download(download: &Download, path: &Path) -> Result<()> {
    std::fs::write(path, download.bytes())?;
    tracing::info!(path = %path.display(), len = download.image.len(), "result saved");
    Ok(())
}
