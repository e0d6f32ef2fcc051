use crate::dependency_classification::domain::{
    DependencyRecords, DependencyRef, Frontier, LibraryCatalog, PackageName,
};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use tracing::debug;

/// TransitiveClassifier service for flagging transitive dependencies
///
/// Runs after the provenance walk. Classification is relative to one
/// project and framework: the same library may be direct in one project
/// and transitive in another.
pub struct TransitiveClassifier;

impl TransitiveClassifier {
    /// Flags the records reachable from the frontier and returns them
    ///
    /// A reachable record is transitive when it is not itself in the
    /// frontier and at least one library requires it. Records are returned
    /// in breadth-first discovery order; records the frontier cannot reach
    /// are left untouched and not returned.
    pub fn classify(
        records: &DependencyRecords,
        catalog: &LibraryCatalog,
        frontier: &Frontier,
    ) -> Vec<DependencyRef> {
        let mut reachable = Vec::with_capacity(records.len());
        let mut seen: HashSet<&PackageName> = HashSet::with_capacity(records.len());
        let mut queue: VecDeque<&PackageName> = frontier.names().iter().collect();

        while let Some(name) = queue.pop_front() {
            if !seen.insert(name) {
                continue;
            }
            let Some(record) = records.get(name.as_str()) else {
                continue;
            };

            record.set_transitive(!frontier.contains(record.identifier()) && record.has_via());
            reachable.push(Rc::clone(record));

            if let Some(entry) = catalog.get(name.as_str()) {
                queue.extend(entry.dependencies());
            }
        }

        let transitive = reachable.iter().filter(|r| r.is_transitive()).count();
        debug!(
            direct = frontier.len(),
            reachable = reachable.len(),
            transitive,
            "classification finished"
        );
        reachable
    }
}
