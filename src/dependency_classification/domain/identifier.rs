//! Case-insensitive identity shared by every node of the output model.
//!
//! Package names, project names and framework identifiers all compare with
//! an invariant, ordinal, case-insensitive comparison: characters are folded
//! to upper case and compared by code point. No locale is consulted.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::Hasher;
use thiserror::Error;

/// Compares two strings ordinally, ignoring case.
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_uppercase)
        .cmp(right.chars().flat_map(char::to_uppercase))
}

/// Equality counterpart of [`compare_ignore_case`].
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    compare_ignore_case(left, right) == Ordering::Equal
}

/// Feeds the case-folded form of `value` into `state`.
///
/// Strings that are [`eq_ignore_case`] hash identically.
pub fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for c in value.chars().flat_map(char::to_uppercase) {
        state.write_u32(c as u32);
    }
    state.write_u8(0xff);
}

/// Lookup key for name-indexed maps.
pub fn lookup_key(name: &str) -> String {
    name.to_uppercase()
}

/// Collapses an ordering into the `{-1, 0, 1}` range.
pub fn ordering_sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Raised when a node is compared against a value of another type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("Object must be of type {expected}")]
    IncompatibleType { expected: &'static str },
}

/// Dynamic comparison for consumers that hold nodes as `&dyn Any`.
///
/// Statically typed code uses `Ord` directly; this exists for generic
/// presentation code that sorts heterogeneous collections.
pub trait NodeOrdering: Ord + Any + Sized {
    /// Type name reported when the other value has an unexpected type.
    const TYPE_NAME: &'static str;

    /// Compares against `other`, returning `-1`, `0` or `1`.
    fn compare_to(&self, other: &dyn Any) -> Result<i32, OrderingError> {
        other
            .downcast_ref::<Self>()
            .map(|other| ordering_sign(self.cmp(other)))
            .ok_or(OrderingError::IncompatibleType {
                expected: Self::TYPE_NAME,
            })
    }
}
