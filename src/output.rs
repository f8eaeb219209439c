use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{error::Result, models::GenerateImageResult};

/// Writes generated images to disk as PNG files.
///
/// Lives outside the generation core: nothing in [`crate::ollama`] calls it.
#[derive(Debug)]
pub struct ImageWriter {
    output_dir: PathBuf,
    written: AtomicUsize,
}

impl ImageWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: AtomicUsize::new(0),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns `Ok(None)` when the result carries no image data.
    pub fn save(&self, result: &GenerateImageResult) -> Result<Option<PathBuf>> {
        if !result.has_image() {
            return Ok(None);
        }

        let bytes = result.decode_image()?;
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(self.next_file_name());
        fs::write(&path, bytes)?;

        log::debug!("Saved image to {}", path.display());
        Ok(Some(path))
    }

    // image-2026-10-19T05-38-00-123Z-1.png
    fn next_file_name(&self) -> String {
        let timestamp = Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        let n = self.written.fetch_add(1, Ordering::Relaxed) + 1;
        format!("image-{}-{}.png", timestamp, n)
    }
}
