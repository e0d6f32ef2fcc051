use super::identifier::lookup_key;
use super::package::{PackageName, PackageVersion};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// One resolved library: its name, version and direct dependency names.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    name: PackageName,
    version: PackageVersion,
    dependencies: Vec<PackageName>,
}

impl CatalogEntry {
    pub fn new(name: PackageName, version: PackageVersion, dependencies: Vec<PackageName>) -> Self {
        Self {
            name,
            version,
            dependencies,
        }
    }

    /// Builds an entry from unvalidated strings.
    pub fn parse(name: &str, version: &str, dependencies: Vec<String>) -> Result<Self> {
        Ok(Self::new(
            PackageName::new(name.to_string())?,
            PackageVersion::new(version.to_string())?,
            dependencies
                .into_iter()
                .map(PackageName::new)
                .collect::<Result<Vec<_>>>()?,
        ))
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &PackageVersion {
        &self.version
    }

    pub fn dependencies(&self) -> &[PackageName] {
        &self.dependencies
    }
}

/// Resolved libraries of one project/framework combination.
///
/// Lookups are case-insensitive; iteration follows insertion order so walks
/// over the same catalog are reproducible.
#[derive(Debug, Clone, Default)]
pub struct LibraryCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl LibraryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts an entry, replacing any entry with the same name in place.
    pub fn insert(&mut self, entry: CatalogEntry) {
        let key = lookup_key(entry.name.as_str());
        match self.index.get(&key) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&lookup_key(name))
            .map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&lookup_key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for LibraryCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut catalog = Self::with_capacity(iter.size_hint().0);
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

/// Libraries a project references directly for one framework.
///
/// Only names present in the catalog make it into a frontier; platform
/// shims and other references without a resolved library are handed back
/// by [`Frontier::resolve`] so the caller can report them.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    names: Vec<PackageName>,
    members: HashSet<PackageName>,
}

impl Frontier {
    /// Builds a frontier from reference names, returning the names the
    /// catalog could not resolve alongside it.
    pub fn resolve<I, S>(references: I, catalog: &LibraryCatalog) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frontier = Self::default();
        let mut unresolved = Vec::new();

        for reference in references {
            let reference = reference.as_ref();
            match catalog.get(reference) {
                Some(entry) => {
                    if frontier.members.insert(entry.name.clone()) {
                        frontier.names.push(entry.name.clone());
                    }
                }
                None => unresolved.push(reference.to_string()),
            }
        }

        (frontier, unresolved)
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.members.contains(name)
    }

    pub fn names(&self) -> &[PackageName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
