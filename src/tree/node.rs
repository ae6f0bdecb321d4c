//! Node - the unit of storage in the B-tree.
//!
//! A [`Node`] holds an ordered run of entries plus, for internal nodes, one
//! more child than it has entries. Leaves own no children. Nodes know nothing
//! about the minimum degree; the [`BTree`](crate::tree::BTree) decides when a
//! node is full and drives splitting.

use std::cmp::Ordering;

use crate::tree::Entry;

/// A single node in the tree.
///
/// # Invariants
/// - `entries` is strictly ascending under [`Entry::compare`]; no duplicates.
/// - `children` is either empty (leaf) or holds exactly
///   `entries.len() + 1` nodes.
/// - For every index `i`, everything under `children[i]` compares less than
///   `entries[i]` and everything under `children[i + 1]` compares greater.
///
/// # Ownership
/// A node exclusively owns its children. There are no parent pointers, no
/// sharing, and no cycles, so plain `Vec<Node<E>>` ownership is enough.
/// [`Node::split`] consumes the node it splits; once a node has been split
/// nothing can reference it again.
#[derive(Debug)]
pub(crate) struct Node<E> {
    /// Stored entries, strictly ascending.
    entries: Vec<E>,

    /// Child nodes; empty for a leaf, `entries.len() + 1` otherwise.
    children: Vec<Node<E>>,
}

impl<E: Entry> Node<E> {
    /// Create a new empty leaf node.
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            children: Vec::new(),
        }
    }

    // ========================================================================
    // State queries
    // ========================================================================

    /// A node with no children is a leaf.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of entries currently stored.
    #[inline]
    pub(crate) fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries as a slice, in ascending order.
    #[inline]
    pub(crate) fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Children as a slice.
    #[inline]
    pub(crate) fn children(&self) -> &[Node<E>] {
        &self.children
    }

    /// Shared access to the child at `i`.
    #[inline]
    pub(crate) fn child(&self, i: usize) -> &Node<E> {
        &self.children[i]
    }

    /// Exclusive access to the child at `i`.
    #[inline]
    pub(crate) fn child_mut(&mut self, i: usize) -> &mut Node<E> {
        &mut self.children[i]
    }

    // ========================================================================
    // Entry operations
    // ========================================================================

    /// Binary search for `entry` within this node.
    ///
    /// Returns the smallest index `i` such that `entries[i] >= entry`. When
    /// `entries[i]` compares equal, the stored entry is returned alongside
    /// `i`. Otherwise the result is `(None, i)` where `i` is both the
    /// position `entry` would be inserted at and, for an internal node, the
    /// index of the child to descend into: every entry before `i` compares
    /// less than `entry`.
    pub(crate) fn locate(&self, entry: &E) -> (Option<&E>, usize) {
        let i = self
            .entries
            .partition_point(|e| e.compare(entry) == Ordering::Less);

        match self.entries.get(i) {
            Some(e) if e.compare(entry) == Ordering::Equal => (Some(e), i),
            _ => (None, i),
        }
    }

    /// Insert `entry` in order, or overwrite an existing equal entry.
    ///
    /// Returns the previous entry on overwrite (the entry count is
    /// unchanged), or `None` when the entry is genuinely new. Never touches
    /// `children`; the caller keeps the child count consistent.
    pub(crate) fn put(&mut self, entry: E) -> Option<E> {
        let (found, i) = {
            let (matched, i) = self.locate(&entry);
            (matched.is_some(), i)
        };

        if found {
            return Some(std::mem::replace(&mut self.entries[i], entry));
        }

        self.entries.insert(i, entry);
        None
    }

    // ========================================================================
    // Child operations
    // ========================================================================

    /// Replace the child at `i`.
    #[inline]
    pub(crate) fn set_child_at(&mut self, i: usize, child: Node<E>) {
        self.children[i] = child;
    }

    /// Insert a new child at `i`, shifting later children right by one.
    #[inline]
    pub(crate) fn put_child_at(&mut self, i: usize, child: Node<E>) {
        self.children.insert(i, child);
    }

    /// Take ownership of the child at `i`, leaving an empty leaf in its
    /// place. The caller must put a replacement back before the node is
    /// observed again.
    #[inline]
    pub(crate) fn take_child(&mut self, i: usize) -> Node<E> {
        std::mem::replace(&mut self.children[i], Node::new())
    }

    // ========================================================================
    // Splitting
    // ========================================================================

    /// Split a full node at its midpoint, consuming it.
    ///
    /// With `2t - 1` entries and midpoint `m = (2t - 1) / 2`, the left node
    /// receives entries `[0, m)` and the right node entries `(m, 2t - 1)`;
    /// the mid entry itself belongs to neither and is returned for promotion
    /// into the parent. Children, when present, split around the same point:
    /// `[0, m + 1)` to the left node, `[m + 1, 2t)` to the right. Both halves
    /// end up with exactly `t - 1` entries, meeting the occupancy floor.
    ///
    /// Consuming `self` is what retires the old node: its storage moves into
    /// the two halves and no reference to it can survive the call.
    pub(crate) fn split(mut self) -> (Node<E>, Node<E>, E) {
        let mid = self.entries.len() / 2;

        let mid_entry = self.entries.remove(mid);
        let right_entries = self.entries.split_off(mid);

        let right_children = if self.children.is_empty() {
            Vec::new()
        } else {
            self.children.split_off(mid + 1)
        };

        let left = Node {
            entries: self.entries,
            children: self.children,
        };
        let right = Node {
            entries: right_entries,
            children: right_children,
        };

        (left, right, mid_entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestEntry {
        key: u64,
        value: u64,
    }

    impl TestEntry {
        fn new(key: u64, value: u64) -> Self {
            Self { key, value }
        }
    }

    impl Entry for TestEntry {
        fn compare(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn leaf_with_keys(keys: &[u64]) -> Node<TestEntry> {
        let mut node = Node::new();
        for &k in keys {
            node.put(TestEntry::new(k, k));
        }
        node
    }

    #[test]
    fn test_new_node_is_empty_leaf() {
        let node: Node<TestEntry> = Node::new();
        assert!(node.is_leaf());
        assert_eq!(node.entry_count(), 0);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_locate_empty() {
        let node: Node<TestEntry> = Node::new();
        let (matched, i) = node.locate(&TestEntry::new(5, 0));
        assert!(matched.is_none());
        assert_eq!(i, 0);
    }

    #[test]
    fn test_locate_match_and_miss() {
        let node = leaf_with_keys(&[10, 20, 30]);

        let (matched, i) = node.locate(&TestEntry::new(20, 99));
        assert_eq!(matched, Some(&TestEntry::new(20, 20)));
        assert_eq!(i, 1);

        // A miss reports the insertion position.
        let (matched, i) = node.locate(&TestEntry::new(25, 0));
        assert!(matched.is_none());
        assert_eq!(i, 2);

        // Past the last entry.
        let (matched, i) = node.locate(&TestEntry::new(40, 0));
        assert!(matched.is_none());
        assert_eq!(i, 3);

        // Before the first entry.
        let (matched, i) = node.locate(&TestEntry::new(5, 0));
        assert!(matched.is_none());
        assert_eq!(i, 0);
    }

    #[test]
    fn test_put_keeps_entries_sorted() {
        let node = leaf_with_keys(&[30, 10, 20]);

        let keys: Vec<u64> = node.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![10, 20, 30]);
    }

    #[test]
    fn test_put_overwrites_equal_key() {
        let mut node = leaf_with_keys(&[10, 20, 30]);

        let previous = node.put(TestEntry::new(20, 99));
        assert_eq!(previous, Some(TestEntry::new(20, 20)));
        assert_eq!(node.entry_count(), 3);

        let (matched, _) = node.locate(&TestEntry::new(20, 0));
        assert_eq!(matched, Some(&TestEntry::new(20, 99)));
    }

    #[test]
    fn test_put_new_entry_returns_none() {
        let mut node = leaf_with_keys(&[10, 30]);
        assert!(node.put(TestEntry::new(20, 20)).is_none());
        assert_eq!(node.entry_count(), 3);
    }

    #[test]
    fn test_child_insert_and_replace() {
        let mut parent = leaf_with_keys(&[50]);
        parent.put_child_at(0, leaf_with_keys(&[10]));
        parent.put_child_at(1, leaf_with_keys(&[60]));
        assert!(!parent.is_leaf());
        assert_eq!(parent.children().len(), 2);

        parent.set_child_at(1, leaf_with_keys(&[70, 80]));
        assert_eq!(parent.child(1).entry_count(), 2);

        // Inserting in the middle shifts later children right.
        parent.put_child_at(1, leaf_with_keys(&[55]));
        assert_eq!(parent.child(1).entries()[0].key, 55);
        assert_eq!(parent.child(2).entries()[0].key, 70);
    }

    #[test]
    fn test_split_leaf() {
        // A full leaf at t = 2: three entries, midpoint index 1.
        let node = leaf_with_keys(&[10, 20, 30]);
        let (left, right, mid) = node.split();

        assert_eq!(mid.key, 20);
        assert_eq!(left.entries().len(), 1);
        assert_eq!(left.entries()[0].key, 10);
        assert_eq!(right.entries().len(), 1);
        assert_eq!(right.entries()[0].key, 30);
        assert!(left.is_leaf());
        assert!(right.is_leaf());
    }

    #[test]
    fn test_split_larger_leaf() {
        // A full leaf at t = 3: five entries, midpoint index 2.
        let node = leaf_with_keys(&[1, 2, 3, 4, 5]);
        let (left, right, mid) = node.split();

        assert_eq!(mid.key, 3);
        let left_keys: Vec<u64> = left.entries().iter().map(|e| e.key).collect();
        let right_keys: Vec<u64> = right.entries().iter().map(|e| e.key).collect();
        assert_eq!(left_keys, vec![1, 2]);
        assert_eq!(right_keys, vec![4, 5]);
    }

    #[test]
    fn test_split_internal_node_divides_children() {
        // Internal node with 3 entries and 4 children (full at t = 2).
        let mut node = leaf_with_keys(&[20, 40, 60]);
        node.put_child_at(0, leaf_with_keys(&[10]));
        node.put_child_at(1, leaf_with_keys(&[30]));
        node.put_child_at(2, leaf_with_keys(&[50]));
        node.put_child_at(3, leaf_with_keys(&[70]));

        let (left, right, mid) = node.split();

        assert_eq!(mid.key, 40);

        // Left keeps entries [20] and children [10], [30].
        assert_eq!(left.entries().len(), 1);
        assert_eq!(left.entries()[0].key, 20);
        assert_eq!(left.children().len(), 2);
        assert_eq!(left.child(0).entries()[0].key, 10);
        assert_eq!(left.child(1).entries()[0].key, 30);

        // Right keeps entries [60] and children [50], [70].
        assert_eq!(right.entries().len(), 1);
        assert_eq!(right.entries()[0].key, 60);
        assert_eq!(right.children().len(), 2);
        assert_eq!(right.child(0).entries()[0].key, 50);
        assert_eq!(right.child(1).entries()[0].key, 70);
    }

    #[test]
    fn test_take_child_leaves_placeholder() {
        let mut parent = leaf_with_keys(&[50]);
        parent.put_child_at(0, leaf_with_keys(&[10, 20]));
        parent.put_child_at(1, leaf_with_keys(&[60]));

        let taken = parent.take_child(0);
        assert_eq!(taken.entry_count(), 2);
        assert_eq!(parent.child(0).entry_count(), 0);
        assert_eq!(parent.children().len(), 2);
    }
}
