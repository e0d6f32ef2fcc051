use crate::dependency_classification::domain::{FrameworkId, LibraryCatalog};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Resolved restore output for one target framework of a project.
#[derive(Debug, Clone)]
pub struct FrameworkAssets {
    pub id: FrameworkId,
    /// Every library resolved for the framework
    pub catalog: LibraryCatalog,
    /// Package names the project file references directly, in file order
    pub direct_references: Vec<String>,
}

impl FrameworkAssets {
    pub fn new(id: FrameworkId, catalog: LibraryCatalog, direct_references: Vec<String>) -> Self {
        Self {
            id,
            catalog,
            direct_references,
        }
    }
}

/// Restore output of one project.
#[derive(Debug, Clone)]
pub struct ProjectAssets {
    pub project_name: String,
    pub frameworks: Vec<FrameworkAssets>,
}

impl ProjectAssets {
    pub fn new(project_name: impl Into<String>, frameworks: Vec<FrameworkAssets>) -> Self {
        Self {
            project_name: project_name.into(),
            frameworks,
        }
    }
}

/// AssetsReader port for locating and reading NuGet restore output
///
/// This port abstracts the file system so the analysis can run against
/// in-memory catalogs in tests.
pub trait AssetsReader {
    /// Finds the assets files below `root`
    ///
    /// `root` may be an assets file, a project file or a directory.
    /// The returned paths are sorted.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be read
    fn discover_assets_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Reads one assets file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read or fails the security checks
    /// - The content is not a valid assets document
    fn read_project_assets(&self, path: &Path) -> Result<ProjectAssets>;
}
