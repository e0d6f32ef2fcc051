use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs can tell bad invocations apart from analysis failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing assets file, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// User-facing errors raised while locating, reading and analysing restore output.
#[derive(Debug, Error)]
pub enum DepsError {
    #[error("project.assets.json not found: {path}\n\n💡 Hint: {suggestion}")]
    AssetsFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse project.assets.json: {path}\nDetails: {details}\n\n💡 Hint: Run `dotnet restore` again to regenerate the assets file")]
    AssetsParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a project directory, project file or project.assets.json")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid filter pattern: '{pattern}'\nDetails: {details}\n\n💡 Hint: The filter is a regular expression matched against package names (e.g. \"^System\\.\")")]
    InvalidFilterPattern { pattern: String, details: String },

    /// Validation error for catalog and request input
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
