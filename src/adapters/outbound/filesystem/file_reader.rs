use super::assets_file::parse_assets;
use crate::ports::outbound::{AssetsReader, ProjectAssets};
use crate::shared::error::DepsError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// File name NuGet restore writes into `obj/`
pub const ASSETS_FILE_NAME: &str = "project.assets.json";

const OBJ_DIR: &str = "obj";

/// Project file extensions whose `obj/` holds an assets file
const PROJECT_FILE_EXTENSIONS: [&str; 3] = ["csproj", "fsproj", "vbproj"];

/// Directories never searched for assets files
const SKIPPED_DIRS: [&str; 2] = ["bin", "node_modules"];

/// FileSystemReader adapter for reading restore output from disk
///
/// Implements the AssetsReader port. Every read goes through the shared
/// security checks (no symlinks, regular files only, size ceiling).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a project file to its `obj/project.assets.json`.
    fn assets_for_project_file(&self, project_file: &Path) -> Result<Vec<PathBuf>> {
        let project_dir = project_file.parent().unwrap_or_else(|| Path::new("."));
        let assets = project_dir.join(OBJ_DIR).join(ASSETS_FILE_NAME);

        if !assets.is_file() {
            return Err(DepsError::AssetsFileNotFound {
                path: assets,
                suggestion: format!(
                    "Run `dotnet restore \"{}\"` first to produce the assets file.",
                    project_file.display()
                ),
            }
            .into());
        }
        Ok(vec![assets])
    }

    /// Searches a directory tree for `obj/project.assets.json` files.
    fn search_directory(&self, root: &Path) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable path during discovery");
                    None
                }
            })
            .filter(is_assets_file)
            .map(DirEntry::into_path)
            .collect();

        found.sort();
        found
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetsReader for FileSystemReader {
    fn discover_assets_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            if root.file_name().is_some_and(|name| name == ASSETS_FILE_NAME) {
                return Ok(vec![root.to_path_buf()]);
            }
            if is_project_file(root) {
                return self.assets_for_project_file(root);
            }
            return Err(DepsError::InvalidProjectPath {
                path: root.to_path_buf(),
                reason: "File is neither a project file nor project.assets.json".to_string(),
            }
            .into());
        }

        if !root.is_dir() {
            return Err(DepsError::InvalidProjectPath {
                path: root.to_path_buf(),
                reason: "Path does not exist".to_string(),
            }
            .into());
        }

        let direct = root.join(OBJ_DIR).join(ASSETS_FILE_NAME);
        if direct.is_file() {
            debug!(path = %direct.display(), "using assets file of project directory");
            return Ok(vec![direct]);
        }

        let found = self.search_directory(root);
        debug!(root = %root.display(), count = found.len(), "assets files discovered");
        Ok(found)
    }

    fn read_project_assets(&self, path: &Path) -> Result<ProjectAssets> {
        let content = read_checked_file(path, ASSETS_FILE_NAME).map_err(|e| {
            // Security rejections already carry their own path and hint
            if e.is::<DepsError>() {
                return e;
            }
            DepsError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })?;
        parse_assets(&content, path)
    }
}

fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PROJECT_FILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn is_assets_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.file_name() == ASSETS_FILE_NAME
        && entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|dir| dir == OBJ_DIR)
}
