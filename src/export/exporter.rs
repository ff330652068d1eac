//! Document exporters
//!
//! `FileExporter` writes atomically (temp file, sync, rename) so a failed
//! export never leaves a half-written report behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MoneyReportError, MoneyResult};

/// Turns document content into an addressable artifact
pub trait Exporter {
    /// Export `content` under `file_name`, returning its location
    fn export_document(&mut self, content: &str, file_name: &str) -> MoneyResult<PathBuf>;
}

/// Writes documents into a directory
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Exporter for FileExporter {
    fn export_document(&mut self, content: &str, file_name: &str) -> MoneyResult<PathBuf> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(MoneyReportError::Export(format!(
                "Invalid report file name: '{}'",
                file_name
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            MoneyReportError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(file_name);
        let temp_path = self.dir.join(format!("{}.tmp", file_name));

        write_and_sync(&temp_path, content)
            .and_then(|_| fs::rename(&temp_path, &path))
            .map_err(|e| {
                // Try to clean up temp file if anything failed
                let _ = fs::remove_file(&temp_path);
                MoneyReportError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;

        info!(path = %path.display(), bytes = content.len(), "report written");
        Ok(path)
    }
}

fn write_and_sync(path: &Path, content: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

/// Keeps exported documents in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryExporter {
    documents: Vec<(String, String)>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(file_name, content)` pairs in export order
    pub fn documents(&self) -> &[(String, String)] {
        &self.documents
    }
}

impl Exporter for MemoryExporter {
    fn export_document(&mut self, content: &str, file_name: &str) -> MoneyResult<PathBuf> {
        self.documents
            .push((file_name.to_string(), content.to_string()));
        Ok(PathBuf::from(file_name))
    }
}
