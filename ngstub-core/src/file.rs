use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the scaffold directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A file to be written, already rendered
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Aggregated result of a batch write
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Paths that were written
    pub written: Vec<PathBuf>,
    /// One entry per file that could not be written
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    /// Whether every file in the batch was written
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single failed write
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Write every file in the batch, independently.
///
/// A failure does not stop the batch and nothing already written is rolled
/// back. An existing file at a target path is overwritten; directory-level
/// existence checks belong to the caller.
pub fn write_all(files: &[File]) -> WriteReport {
    let mut report = WriteReport::default();
    for file in files {
        match write_file(file.path(), file.content()) {
            Ok(()) => report.written.push(file.path().to_path_buf()),
            Err(err) => report.failures.push(WriteFailure {
                path: file.path().to_path_buf(),
                message: err.to_string(),
            }),
        }
    }
    report
}
