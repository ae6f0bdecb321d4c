//! The comparison capability that tree entries must provide.

use std::cmp::Ordering;

/// Contract for any element stored in a [`BTree`](crate::tree::BTree).
///
/// A single three-way comparison is the only capability the tree needs: it
/// drives the binary search within a node, the descent from a node to one of
/// its children, and the left-or-right choice after a split.
///
/// Entries that wrap a key/value pair should compare on the key alone, so
/// that inserting a second entry with an equal key overwrites the stored
/// value in place.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use memtree::Entry;
///
/// #[derive(Debug, Clone)]
/// struct Pair {
///     key: u64,
///     value: u64,
/// }
///
/// impl Entry for Pair {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.key.cmp(&other.key)
///     }
/// }
/// ```
pub trait Entry {
    /// Compare `self` against `other`.
    ///
    /// Returns [`Ordering::Less`] when `self` sorts before `other`,
    /// [`Ordering::Equal`] when they carry the same key, and
    /// [`Ordering::Greater`] otherwise. The ordering must be total and
    /// consistent across calls, or the tree's search invariant breaks down.
    fn compare(&self, other: &Self) -> Ordering;
}
