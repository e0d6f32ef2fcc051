use super::identifier::{compare_ignore_case, hash_ignore_case};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

const VERSION_SEPARATOR: &str = ",Version=v";

/// Target framework identifier such as `.NETCoreApp,Version=v3.1`.
///
/// Compares name first, then version, both case-insensitively.
#[derive(Debug, Clone)]
pub struct FrameworkId {
    name: String,
    version: String,
}

impl FrameworkId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parses the long form used as a key in restore output.
    ///
    /// `".NETCoreApp,Version=v3.1"` becomes name `.NETCoreApp`, version `3.1`.
    /// Anything without a `,Version=v` part is kept whole as the name.
    pub fn parse(value: &str) -> Self {
        match value.split_once(VERSION_SEPARATOR) {
            Some((name, version)) => Self::new(name.trim(), version.trim()),
            None => Self::new(value.trim(), ""),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl PartialEq for FrameworkId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrameworkId {}

impl PartialOrd for FrameworkId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameworkId {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.name, &other.name)
            .then_with(|| compare_ignore_case(&self.version, &other.version))
    }
}

impl Hash for FrameworkId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.name, state);
        hash_ignore_case(&self.version, state);
    }
}

impl std::fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}{}{}", self.name, VERSION_SEPARATOR, self.version)
        }
    }
}
