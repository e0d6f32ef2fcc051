use super::identifier::{ordering_sign, NodeOrdering};
use super::package::{PackageName, PackageVersion};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// Shared handle to a dependency record.
///
/// One record exists per library name within a framework run; the walker,
/// the classifier, via-sets of other records and the output model all point
/// at the same record.
pub type DependencyRef = Rc<Dependency>;

/// Classification state for one resolved library in one project/framework run.
///
/// Identity is `(identifier, version)`, compared case-insensitively. The
/// via-set and the transitive flag are mutable state that identity ignores,
/// so records stay stable map keys and sort keys while the walk and the
/// classifier update them in place.
#[derive(Debug)]
pub struct Dependency {
    identifier: PackageName,
    version: PackageVersion,
    via: RefCell<BTreeSet<Via>>,
    is_transitive: Cell<bool>,
}

impl Dependency {
    pub fn new(identifier: PackageName, version: PackageVersion) -> Self {
        Self {
            identifier,
            version,
            via: RefCell::new(BTreeSet::new()),
            is_transitive: Cell::new(false),
        }
    }

    pub fn identifier(&self) -> &PackageName {
        &self.identifier
    }

    pub fn version(&self) -> &PackageVersion {
        &self.version
    }

    pub fn is_transitive(&self) -> bool {
        self.is_transitive.get()
    }

    pub(crate) fn set_transitive(&self, is_transitive: bool) {
        self.is_transitive.set(is_transitive);
    }

    /// Records `parent` as a library that directly requires this one.
    ///
    /// Returns `false` when the entry was already present or when `parent`
    /// is this record.
    pub(crate) fn add_via(&self, parent: &DependencyRef) -> bool {
        if parent.identifier == self.identifier {
            return false;
        }
        self.via.borrow_mut().insert(Via::new(parent))
    }

    pub fn has_via(&self) -> bool {
        !self.via.borrow().is_empty()
    }

    pub fn via_count(&self) -> usize {
        self.via.borrow().len()
    }

    /// Parents of this record in ascending identity order.
    pub fn via(&self) -> Vec<Via> {
        self.via.borrow().iter().cloned().collect()
    }

    /// Whether `identifier` appears among the parents.
    pub fn is_required_by(&self, identifier: &PackageName) -> bool {
        self.via
            .borrow()
            .iter()
            .any(|entry| &entry.identifier == identifier)
    }

    /// Three-way comparison clamped to `{-1, 0, 1}`.
    pub fn compare(&self, other: &Self) -> i32 {
        ordering_sign(self.cmp(other))
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.version == other.version
    }
}

impl Eq for Dependency {}

impl PartialOrd for Dependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dependency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier
            .cmp(&other.identifier)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl Hash for Dependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.version.hash(state);
    }
}

impl NodeOrdering for Dependency {
    const TYPE_NAME: &'static str = "Dependency";
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.identifier, self.version)
    }
}

/// Entry of a via-set: the identity of a parent plus a handle to its record.
///
/// The handle is weak so cyclic catalogs do not leak; the framework that
/// owns the run keeps every record of the walk alive.
#[derive(Debug, Clone)]
pub struct Via {
    identifier: PackageName,
    version: PackageVersion,
    record: Weak<Dependency>,
}

impl Via {
    fn new(parent: &DependencyRef) -> Self {
        Self {
            identifier: parent.identifier.clone(),
            version: parent.version.clone(),
            record: Rc::downgrade(parent),
        }
    }

    pub fn identifier(&self) -> &PackageName {
        &self.identifier
    }

    pub fn version(&self) -> &PackageVersion {
        &self.version
    }

    /// The parent record, if its run is still alive.
    pub fn record(&self) -> Option<DependencyRef> {
        self.record.upgrade()
    }
}

impl PartialEq for Via {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.version == other.version
    }
}

impl Eq for Via {}

impl PartialOrd for Via {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Via {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier
            .cmp(&other.identifier)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl std::fmt::Display for Via {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.identifier, self.version)
    }
}
