use super::children::{Children, Container};
use super::dependency::DependencyRef;
use super::dependency_records::DependencyRecords;
use super::framework_id::FrameworkId;
use super::identifier::NodeOrdering;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Classified dependencies of one project for one target framework.
///
/// Equality, ordering and hashing use only the framework id.
#[derive(Debug)]
pub struct Framework {
    id: FrameworkId,
    dependencies: Children<DependencyRef>,
    records: DependencyRecords,
}

impl Framework {
    pub fn new(id: FrameworkId, capacity: usize) -> Self {
        Self {
            id,
            dependencies: Children::with_capacity(capacity),
            records: DependencyRecords::default(),
        }
    }

    pub fn id(&self) -> &FrameworkId {
        &self.id
    }

    /// Takes ownership of the walk that produced this framework's children.
    ///
    /// Via entries hold weak handles; keeping the full walk here lets
    /// provenance be followed through records that filters left out.
    pub fn retain_records(&mut self, records: DependencyRecords) {
        self.records = records;
    }

    /// Every record of the walk, including those not added as children.
    pub fn records(&self) -> &DependencyRecords {
        &self.records
    }
}

impl Container for Framework {
    type Child = DependencyRef;

    fn children(&self) -> &Children<DependencyRef> {
        &self.dependencies
    }

    fn children_mut(&mut self) -> &mut Children<DependencyRef> {
        &mut self.dependencies
    }

    fn accepts(_child: &DependencyRef) -> bool {
        true
    }
}

impl PartialEq for Framework {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Framework {}

impl PartialOrd for Framework {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Framework {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Framework {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl NodeOrdering for Framework {
    const TYPE_NAME: &'static str = "Framework";
}
