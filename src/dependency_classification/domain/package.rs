use super::identifier::{compare_ignore_case, hash_ignore_case};
use crate::shared::error::DepsError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Version assigned to dependency names that have no catalog entry.
pub const UNRESOLVED_VERSION: &str = "unresolved";

fn invalid(message: String) -> anyhow::Error {
    DepsError::Validation { message }.into()
}

/// NuGet package id.
///
/// Package ids are case-insensitive, so equality, ordering and hashing
/// ignore case while `as_str` keeps the spelling from the assets file.
#[derive(Debug, Clone)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid("Package name cannot be empty".to_string()));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(invalid(format!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for PackageName {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageName {}

impl PartialOrd for PackageName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageName {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.0, &other.0)
    }
}

impl Hash for PackageName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.0, state);
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved package version.
///
/// Kept opaque: NuGet versions may carry four numeric parts, prerelease
/// labels and build metadata, and nodes only ever compare the string form.
#[derive(Debug, Clone)]
pub struct PackageVersion(String);

impl PackageVersion {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            return Err(invalid("Package version cannot be empty".to_string()));
        }

        if version.len() > MAX_VERSION_LENGTH {
            return Err(invalid(format!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            )));
        }

        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '+')
        {
            return Err(invalid(format!(
                "Package version '{}' contains invalid characters. Only alphanumeric, dots, hyphens and plus are allowed.",
                version
            )));
        }

        Ok(Self(version))
    }

    /// Placeholder version for names the catalog cannot resolve.
    pub fn unresolved() -> Self {
        Self(UNRESOLVED_VERSION.to_string())
    }

    pub fn is_unresolved(&self) -> bool {
        self.0 == UNRESOLVED_VERSION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.0, &other.0)
    }
}

impl Hash for PackageVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.0, state);
    }
}

impl std::fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
