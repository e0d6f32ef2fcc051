use crate::dependency_classification::domain::{CatalogEntry, FrameworkId, LibraryCatalog};
use crate::ports::outbound::{FrameworkAssets, ProjectAssets};
use crate::shared::error::DepsError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Dependency group that applies to every target framework
const SHARED_GROUP: &str = "";

/// Subset of `project.assets.json` the analysis needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetsDocument {
    #[serde(default)]
    targets: BTreeMap<String, BTreeMap<String, TargetLibrary>>,
    #[serde(default)]
    project_file_dependency_groups: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    project: Option<ProjectSection>,
}

#[derive(Debug, Deserialize)]
struct TargetLibrary {
    /// Dependency name to version range
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ProjectSection {
    #[serde(default)]
    restore: Option<RestoreSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestoreSection {
    #[serde(default)]
    project_name: Option<String>,
}

/// Parses the content of an assets file read from `path`
///
/// # Errors
/// Returns [`DepsError::AssetsParseError`] when the JSON is malformed or a
/// library name or version fails validation.
pub(crate) fn parse_assets(content: &str, path: &Path) -> Result<ProjectAssets> {
    let document: AssetsDocument =
        serde_json::from_str(content).map_err(|e| DepsError::AssetsParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let project_name = document
        .project
        .as_ref()
        .and_then(|project| project.restore.as_ref())
        .and_then(|restore| restore.project_name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| project_name_from_path(path));

    let shared_references = document
        .project_file_dependency_groups
        .get(SHARED_GROUP)
        .map(|group| reference_names(group))
        .unwrap_or_default();

    let mut frameworks = Vec::with_capacity(document.targets.len());
    for (target, libraries) in &document.targets {
        if target.contains('/') {
            debug!(target = %target, "skipping runtime-specific target");
            continue;
        }

        let catalog = build_catalog(libraries, path)?;
        let mut direct_references = document
            .project_file_dependency_groups
            .get(target)
            .map(|group| reference_names(group))
            .unwrap_or_default();
        direct_references.extend(shared_references.iter().cloned());

        frameworks.push(FrameworkAssets::new(
            FrameworkId::parse(target),
            catalog,
            direct_references,
        ));
    }

    debug!(
        project = %project_name,
        frameworks = frameworks.len(),
        path = %path.display(),
        "assets file parsed"
    );
    Ok(ProjectAssets::new(project_name, frameworks))
}

/// Builds the catalog of one target from its `Name/Version` keyed libraries.
fn build_catalog(libraries: &BTreeMap<String, TargetLibrary>, path: &Path) -> Result<LibraryCatalog> {
    let mut catalog = LibraryCatalog::with_capacity(libraries.len());

    for (key, library) in libraries {
        let Some((name, version)) = key.split_once('/') else {
            warn!(library = %key, "target library key has no version, skipping");
            continue;
        };

        let dependencies = library.dependencies.keys().cloned().collect();
        let entry = CatalogEntry::parse(name, version, dependencies).map_err(|e| {
            DepsError::AssetsParseError {
                path: path.to_path_buf(),
                details: format!("library '{}': {}", key, e),
            }
        })?;
        catalog.insert(entry);
    }

    Ok(catalog)
}

/// Extracts package names from dependency group entries such as `"Serilog >= 2.10.0"`.
fn reference_names(group: &[String]) -> Vec<String> {
    group
        .iter()
        .filter_map(|entry| entry.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Falls back to the directory that holds `obj/`.
fn project_name_from_path(path: &Path) -> String {
    let mut dir = path.parent();
    if let Some(parent) = dir {
        if parent.file_name().is_some_and(|name| name == "obj") {
            dir = parent.parent();
        }
    }

    dir.and_then(|d| d.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
