//! Email capture: the append-only sink for submitted addresses.
//!
//! The pipeline only needs a `record(email)` capability; how and where the
//! address is stored is this collaborator's concern. A recording failure is
//! logged by the caller and never aborts an analysis run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error_handling::CaptureError;

/// Append-only store for captured email addresses.
pub trait EmailSink: Send + Sync {
    /// Appends one address to the store.
    fn record(&self, email: &str) -> Result<(), CaptureError>;
}

/// [`EmailSink`] backed by a flat file, one address per line.
#[derive(Debug)]
pub struct FileEmailSink {
    path: PathBuf,
    // Serializes appends so two concurrent runs cannot interleave lines.
    write_lock: Mutex<()>,
}

impl FileEmailSink {
    /// Creates a sink appending to `path`. The file is created on first
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileEmailSink {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

impl EmailSink for FileEmailSink {
    fn record(&self, email: &str) -> Result<(), CaptureError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{email}")?;
        log::debug!("recorded email to {}", self.path.display());
        Ok(())
    }
}
