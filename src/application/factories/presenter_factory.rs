use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
///
/// Chooses between stdout and a file depending on `--output`.
pub struct PresenterFactory;

impl PresenterType {
    /// File output when a path is given, stdout otherwise.
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(PresenterType::Stdout, PresenterType::File)
    }
}

impl PresenterFactory {
    /// Creates a presenter for `presenter_type`
    ///
    /// # Examples
    /// ```
    /// use transitive_deps::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
