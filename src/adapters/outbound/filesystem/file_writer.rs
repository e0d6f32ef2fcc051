use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DepsError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// FileSystemWriter adapter for writing the report to a file
///
/// Implements the OutputPresenter port. Refuses to write through symbolic
/// links and never creates missing parent directories.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> DepsError {
        DepsError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    fn validate_parent_directory(&self) -> Result<()> {
        let Some(parent) = self.output_path.parent() else {
            return Ok(());
        };
        if parent == Path::new("") {
            return Ok(());
        }
        if !parent.is_dir() {
            return Err(self
                .write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                ))
                .into());
        }
        parent
            .canonicalize()
            .map_err(|e| self.write_error(format!("Failed to validate parent directory: {}", e)))?;
        Ok(())
    }

    fn validate_output_path(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_path()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        debug!(path = %self.output_path.display(), bytes = content.len(), "report written");
        eprintln!("✅ Report written to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        write_with_newline(&mut io::stdout().lock(), content)
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}

/// Writes `content`, terminating it with a newline if it lacks one.
fn write_with_newline(out: &mut impl Write, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
