//! Child storage shared by `Projects`, `Project` and `Framework`.
//!
//! Children are appended in arrival order and only ever handed out sorted.
//! Sorting is deferred to the first read after an append and cached until
//! the next append.

use std::cell::{Cell, Ref, RefCell};

/// Insertion-ordered children with a lazily sorted view.
#[derive(Debug)]
pub struct Children<T> {
    items: RefCell<Vec<T>>,
    sorted: Cell<bool>,
}

impl<T: Ord> Children<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: RefCell::new(Vec::with_capacity(capacity)),
            sorted: Cell::new(true),
        }
    }

    /// Appends without checks and invalidates the sorted view.
    pub fn push(&mut self, item: T) {
        self.items.get_mut().push(item);
        self.sorted.set(false);
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the next `sorted()` call can skip sorting.
    pub fn is_sorted(&self) -> bool {
        self.sorted.get()
    }

    /// Tests children in storage order without forcing a sort.
    pub fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.borrow().iter().any(predicate)
    }

    /// Children in ascending order (stable for equal elements).
    pub fn sorted(&self) -> Ref<'_, [T]> {
        // `push` needs `&mut self`, so no `Ref` handed out earlier can be
        // alive while the cache is dirty.
        if !self.sorted.get() {
            self.items.borrow_mut().sort();
            self.sorted.set(true);
        }
        Ref::map(self.items.borrow(), Vec::as_slice)
    }
}

/// Validity-gated container of sorted children.
pub trait Container {
    type Child: Ord;

    fn children(&self) -> &Children<Self::Child>;

    fn children_mut(&mut self) -> &mut Children<Self::Child>;

    /// Gate applied by [`Container::add`].
    fn accepts(child: &Self::Child) -> bool;

    /// Appends `child` if the gate accepts it; rejected children are dropped.
    fn add(&mut self, child: Self::Child) -> bool {
        if !Self::accepts(&child) {
            return false;
        }
        self.children_mut().push(child);
        true
    }

    /// Whether any child was added. Does not look at grandchildren.
    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    fn sorted_children(&self) -> Ref<'_, [Self::Child]> {
        self.children().sorted()
    }
}
