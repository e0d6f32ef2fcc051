use super::dependency::{Dependency, DependencyRef};
use super::identifier::lookup_key;
use std::collections::HashMap;
use std::rc::Rc;

/// Records of one framework walk, keyed case-insensitively by library name.
///
/// A fresh map is built for every framework; records are never carried over
/// to the next run.
#[derive(Debug, Default)]
pub struct DependencyRecords {
    records: Vec<DependencyRef>,
    index: HashMap<String, usize>,
}

impl DependencyRecords {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the record for `name`, creating it with `create` if absent.
    ///
    /// The flag is `true` when the record was created by this call.
    pub fn get_or_insert_with(
        &mut self,
        name: &str,
        create: impl FnOnce() -> Dependency,
    ) -> (DependencyRef, bool) {
        let key = lookup_key(name);
        if let Some(&position) = self.index.get(&key) {
            return (Rc::clone(&self.records[position]), false);
        }

        let record = Rc::new(create());
        self.index.insert(key, self.records.len());
        self.records.push(Rc::clone(&record));
        (record, true)
    }

    pub fn get(&self, name: &str) -> Option<&DependencyRef> {
        self.index
            .get(&lookup_key(name))
            .map(|&position| &self.records[position])
    }

    /// Records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyRef> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
