use std::path::{Path, PathBuf};
use transitive_deps::prelude::*;

/// Mock AssetsReader serving in-memory projects
///
/// Each project is exposed at `/repo/<name>/obj/project.assets.json`.
pub struct MockAssetsReader {
    projects: Vec<(PathBuf, ProjectAssets)>,
    should_fail: bool,
}

impl MockAssetsReader {
    pub fn new(projects: Vec<ProjectAssets>) -> Self {
        Self {
            projects: projects
                .into_iter()
                .map(|project| {
                    let path = PathBuf::from(format!(
                        "/repo/{}/obj/project.assets.json",
                        project.project_name
                    ));
                    (path, project)
                })
                .collect(),
            should_fail: false,
        }
    }

    /// Reader whose every read fails, as if the assets file were corrupt.
    pub fn with_failure(projects: Vec<ProjectAssets>) -> Self {
        Self {
            should_fail: true,
            ..Self::new(projects)
        }
    }
}

impl AssetsReader for MockAssetsReader {
    fn discover_assets_files(&self, _root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.projects.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read_project_assets(&self, path: &Path) -> Result<ProjectAssets> {
        if self.should_fail {
            anyhow::bail!("Mock failure reading {}", path.display());
        }
        self.projects
            .iter()
            .find(|(candidate, _)| candidate == path)
            .map(|(_, assets)| assets.clone())
            .ok_or_else(|| anyhow::anyhow!("No mock assets at {}", path.display()))
    }
}
