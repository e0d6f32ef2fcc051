use crate::dependency_classification::domain::{
    Dependency, DependencyRecords, DependencyRef, LibraryCatalog, PackageName, PackageVersion,
};
use tracing::{debug, trace};

/// ProvenanceWalker service for recording who requires whom
///
/// Pure algorithm with no I/O: builds one record per library and fills
/// every record's via-set with the libraries that directly require it.
pub struct ProvenanceWalker;

impl ProvenanceWalker {
    /// Walks the whole catalog and returns the populated records
    ///
    /// Every catalog library is treated as a potential root. Starting from
    /// it, provenance is pushed down each dependency edge: the dependent's
    /// record is created if absent and the current record joins its
    /// via-set. A record is expanded only when it is created, so each edge
    /// is visited exactly once and cycles terminate. The work stack keeps
    /// deep chains off the call stack.
    ///
    /// Dependency names missing from the catalog get a record with an
    /// unresolved version and no further edges.
    pub fn walk(catalog: &LibraryCatalog) -> DependencyRecords {
        let mut records = DependencyRecords::with_capacity(catalog.len());
        let mut pending: Vec<DependencyRef> = Vec::new();
        let mut edges = 0usize;

        for entry in catalog.iter() {
            let (root, created) = Self::record(entry.name(), catalog, &mut records);
            if created {
                pending.push(root);
            }

            while let Some(current) = pending.pop() {
                let Some(current_entry) = catalog.get(current.identifier().as_str()) else {
                    continue;
                };

                for dependency_name in current_entry.dependencies() {
                    let (dependent, created) =
                        Self::record(dependency_name, catalog, &mut records);
                    if dependent.add_via(&current) {
                        edges += 1;
                    }
                    if created {
                        pending.push(dependent);
                    }
                }
            }
        }

        debug!(
            libraries = catalog.len(),
            records = records.len(),
            edges,
            "provenance walk finished"
        );
        records
    }

    /// Returns the record for `name`, creating it from the catalog if needed.
    fn record(
        name: &PackageName,
        catalog: &LibraryCatalog,
        records: &mut DependencyRecords,
    ) -> (DependencyRef, bool) {
        records.get_or_insert_with(name.as_str(), || match catalog.get(name.as_str()) {
            Some(entry) => Dependency::new(entry.name().clone(), entry.version().clone()),
            None => {
                trace!(dependency = %name, "dependency has no catalog entry");
                Dependency::new(name.clone(), PackageVersion::unresolved())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_classification::domain::CatalogEntry;

    fn catalog(entries: &[(&str, &[&str])]) -> LibraryCatalog {
        entries
            .iter()
            .map(|(name, deps)| {
                CatalogEntry::parse(name, "1.0.0", deps.iter().map(|d| d.to_string()).collect())
                    .unwrap()
            })
            .collect()
    }

    fn via_names(records: &DependencyRecords, name: &str) -> Vec<String> {
        records
            .get(name)
            .unwrap()
            .via()
            .iter()
            .map(|v| v.identifier().to_string())
            .collect()
    }

    #[test]
    fn test_walk_chain() {
        let catalog = catalog(&[("A", &["B"]), ("B", &["C"]), ("C", &[])]);
        let records = ProvenanceWalker::walk(&catalog);

        assert_eq!(records.len(), 3);
        assert!(via_names(&records, "A").is_empty());
        assert_eq!(via_names(&records, "B"), vec!["A"]);
        assert_eq!(via_names(&records, "C"), vec!["B"]);
    }

    #[test]
    fn test_walk_diamond_accumulates_all_parents() {
        let catalog = catalog(&[("A", &["C"]), ("B", &["C"]), ("C", &[])]);
        let records = ProvenanceWalker::walk(&catalog);

        assert_eq!(via_names(&records, "C"), vec!["A", "B"]);
    }

    #[test]
    fn test_walk_order_does_not_matter() {
        // The dependent appears before its parent in the catalog
        let catalog = catalog(&[("C", &[]), ("B", &["C"]), ("A", &["B"])]);
        let records = ProvenanceWalker::walk(&catalog);

        assert_eq!(via_names(&records, "B"), vec!["A"]);
        assert_eq!(via_names(&records, "C"), vec!["B"]);
    }

    #[test]
    fn test_walk_cycle_terminates() {
        let catalog = catalog(&[("A", &["B"]), ("B", &["A"])]);
        let records = ProvenanceWalker::walk(&catalog);

        assert_eq!(records.len(), 2);
        assert_eq!(via_names(&records, "A"), vec!["B"]);
        assert_eq!(via_names(&records, "B"), vec!["A"]);
    }

    #[test]
    fn test_walk_self_reference_is_ignored() {
        let catalog = catalog(&[("A", &["A", "B"]), ("B", &[])]);
        let records = ProvenanceWalker::walk(&catalog);

        assert!(via_names(&records, "A").is_empty());
        assert_eq!(via_names(&records, "B"), vec!["A"]);
    }

    #[test]
    fn test_walk_isolated_library_gets_record() {
        let catalog = catalog(&[("Lonely", &[])]);
        let records = ProvenanceWalker::walk(&catalog);

        let lonely = records.get("lonely").unwrap();
        assert!(!lonely.has_via());
        assert!(!lonely.is_transitive());
    }

    #[test]
    fn test_walk_unresolved_dependency_gets_placeholder_record() {
        let catalog = catalog(&[("A", &["Missing.Package"])]);
        let records = ProvenanceWalker::walk(&catalog);

        let missing = records.get("Missing.Package").unwrap();
        assert!(missing.version().is_unresolved());
        assert_eq!(via_names(&records, "Missing.Package"), vec!["A"]);
    }

    #[test]
    fn test_walk_dependency_names_match_case_insensitively() {
        let catalog = catalog(&[("A", &["system.memory"]), ("System.Memory", &[])]);
        let records = ProvenanceWalker::walk(&catalog);

        assert_eq!(records.len(), 2);
        let memory = records.get("SYSTEM.MEMORY").unwrap();
        assert_eq!(memory.identifier().as_str(), "System.Memory");
        assert!(!memory.version().is_unresolved());
        assert_eq!(via_names(&records, "System.Memory"), vec!["A"]);
    }

    #[test]
    fn test_walk_long_chain_does_not_overflow() {
        let names: Vec<String> = (0..20_000).map(|i| format!("Pkg{}", i)).collect();
        let catalog: LibraryCatalog = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let deps = names.get(i + 1).cloned().into_iter().collect();
                CatalogEntry::parse(name, "1.0.0", deps).unwrap()
            })
            .collect();

        let records = ProvenanceWalker::walk(&catalog);
        assert_eq!(records.len(), 20_000);
        assert_eq!(via_names(&records, "Pkg19999"), vec!["Pkg19998"]);
    }

    #[test]
    fn test_walk_is_idempotent() {
        let catalog = catalog(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["D"]),
            ("D", &["A"]),
        ]);

        let first = ProvenanceWalker::walk(&catalog);
        let second = ProvenanceWalker::walk(&catalog);

        assert_eq!(first.len(), second.len());
        for record in first.iter() {
            let other = second.get(record.identifier().as_str()).unwrap();
            assert_eq!(**record, **other);
            assert_eq!(record.via(), other.via());
            assert_eq!(record.is_transitive(), other.is_transitive());
        }
    }
}
