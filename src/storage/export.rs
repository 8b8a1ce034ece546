//! Export sink collaborator.
//!
//! The store hands the sink a filename and a serialized payload; where the bytes end
//! up is the sink's business. Inside Zellij the plugin writes into a directory on the
//! host filesystem.

use crate::domain::error::Result;
use std::path::PathBuf;

/// Default filename for a full export.
pub const EXPORT_FILENAME: &str = "recipes.json";

/// Destination for exported recipe payloads.
pub trait ExportSink {
    /// Saves `payload` under `filename`, returning where it was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written.
    fn save(&mut self, filename: &str, payload: &[u8]) -> Result<PathBuf>;
}

/// Export sink writing files into a directory.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for FileExportSink {
    fn save(&mut self, filename: &str, payload: &[u8]) -> Result<PathBuf> {
        let _span = tracing::debug_span!("export_save",
            dir = ?self.dir,
            filename = %filename,
            bytes = payload.len()
        ).entered();

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, payload)?;

        tracing::debug!(path = ?path, "export written");
        Ok(path)
    }
}
