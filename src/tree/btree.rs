//! BTree - the thread-safe tree orchestrator.
//!
//! The [`BTree`] owns the root [`Node`], tracks the aggregate size and depth
//! counters, enforces the minimum-degree bound, and serializes every
//! operation behind a single reader-writer lock.

use std::cmp::Ordering;

use parking_lot::RwLock;

use crate::common::config::{max_entries, MIN_MIN_DEGREE};
use crate::common::{Error, Result};
use crate::tree::node::Node;
use crate::tree::Entry;

/// Mutable interior of the tree, guarded as one unit.
///
/// The root reference and both counters always change together under the
/// write lock, so they live behind the same `RwLock` rather than in
/// separate cells.
struct TreeInner<E> {
    /// The tree's single entry point. Replaced, never mutated in place,
    /// when the root itself is split.
    root: Node<E>,

    /// Count of distinct stored entries.
    size: usize,

    /// Number of node levels from the root to any leaf. Every leaf sits at
    /// this depth.
    depth: usize,
}

/// A thread-safe, self-balancing B-tree held entirely in memory.
///
/// The tree is parameterized by a minimum degree `t >= 2`: every node except
/// the root holds between `t - 1` and `2t - 1` entries, the root holds at
/// least one entry (zero only while empty), and an internal node always has
/// one more child than it has entries. Search and insert both run in
/// logarithmic time.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │                        BTree<E>                         │
/// │  ┌───────────────┐   ┌──────────────────────────────┐   │
/// │  │  min_degree   │   │   RwLock<TreeInner<E>>       │   │
/// │  │  (immutable)  │   │  ┌────────┐ ┌──────┐ ┌─────┐ │   │
/// │  └───────────────┘   │  │  root  │ │ size │ │depth│ │   │
/// │                      │  └───┬────┘ └──────┘ └─────┘ │   │
/// │                      └──────┼───────────────────────┘   │
/// │                             ▼                           │
/// │                     Node ── Node ── Node                │
/// │                      │        │       │                 │
/// │                     ...      ...     ...                │
/// └─────────────────────────────────────────────────────────┘
/// ```
///
/// # Insertion strategy
/// Insertion walks top-down and splits every full node *before* descending
/// into it. By the time the walk reaches a leaf, the leaf is guaranteed to
/// have room for one more entry, so a split never has to propagate back up
/// the path. The root is the one node without a parent to take a promoted
/// entry; splitting it grows a fresh root above the two halves, which is the
/// only way the tree gets deeper.
///
/// # Thread safety
/// One `RwLock` guards the whole structure. [`search`](BTree::search),
/// [`size`](BTree::size) and [`depth`](BTree::depth) take it in shared mode,
/// so any number of readers run concurrently. [`insert`](BTree::insert)
/// takes it in exclusive mode for the full walk, so a reader can never
/// observe a half-split node. Share the tree across threads with `Arc`.
///
/// # Usage
/// ```
/// use std::cmp::Ordering;
/// use memtree::{BTree, Entry};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Pair(u64, &'static str);
///
/// impl Entry for Pair {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// let tree = BTree::new(2).unwrap();
/// tree.insert(Pair(7, "seven"));
/// tree.insert(Pair(3, "three"));
///
/// assert_eq!(tree.search(&Pair(7, "")), Some(Pair(7, "seven")));
/// assert_eq!(tree.search(&Pair(9, "")), None);
/// assert_eq!(tree.size(), 2);
/// ```
pub struct BTree<E: Entry> {
    /// Root node plus counters, guarded by the tree-wide lock.
    inner: RwLock<TreeInner<E>>,

    /// Minimum degree `t` (immutable after construction).
    min_degree: usize,
}

impl<E: Entry> BTree<E> {
    /// Create a new tree with minimum degree `min_degree`.
    ///
    /// The new tree has an empty root leaf, `size` 0 and `depth` 1.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] when `min_degree < 2`.
    pub fn new(min_degree: usize) -> Result<Self> {
        if min_degree < MIN_MIN_DEGREE {
            return Err(Error::InvalidConfiguration(min_degree));
        }

        Ok(Self {
            inner: RwLock::new(TreeInner {
                root: Node::new(),
                size: 0,
                depth: 1,
            }),
            min_degree,
        })
    }

    // ========================================================================
    // Public API: Counters
    // ========================================================================

    /// The minimum degree the tree was constructed with.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of distinct entries currently stored.
    pub fn size(&self) -> usize {
        self.inner.read().size
    }

    /// Number of node levels from the root to the leaves.
    ///
    /// Starts at 1 for a fresh tree and grows by one each time the root is
    /// split.
    pub fn depth(&self) -> usize {
        self.inner.read().depth
    }

    // ========================================================================
    // Public API: Search
    // ========================================================================

    /// Look up an entry comparing equal to `entry`.
    ///
    /// Descends from the root, binary-searching each node on the way. Returns
    /// a clone of the stored entry, or `None` when no entry matches. Takes
    /// the tree lock in shared mode, so searches from many threads proceed
    /// in parallel.
    pub fn search(&self, entry: &E) -> Option<E>
    where
        E: Clone,
    {
        let inner = self.inner.read();

        let mut curr = &inner.root;
        loop {
            let (matched, i) = curr.locate(entry);
            if let Some(found) = matched {
                return Some(found.clone());
            }

            if curr.is_leaf() {
                return None;
            }

            curr = curr.child(i);
        }
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert `entry` into the tree.
    ///
    /// When an entry with an equal key already exists, the stored entry is
    /// overwritten in place and [`size`](BTree::size) does not change.
    /// Otherwise the entry is added and `size` grows by one. Takes the tree
    /// lock in exclusive mode for the whole top-down walk.
    pub fn insert(&self, entry: E) {
        let mut inner = self.inner.write();
        self.insert_locked(&mut inner, entry);
    }

    // ========================================================================
    // Internal: Preemptive-split insertion walk
    // ========================================================================

    /// The top-down insertion walk. Caller holds the write lock.
    ///
    /// Full nodes are split on the way down, before the walk descends into
    /// them, so the leaf reached at the bottom always has room and no split
    /// ever needs to travel back up.
    fn insert_locked(&self, inner: &mut TreeInner<E>, entry: E) {
        // The root needs special handling before the walk: it has no parent
        // to absorb a promoted entry, so a full internal root is split here,
        // growing the tree by one level. An existing key in the root must be
        // overwritten without splitting anything, hence the lookup first.
        if !inner.root.is_leaf() {
            let found = inner.root.locate(&entry).0.is_some();
            if found {
                inner.root.put(entry);
                return;
            }

            if self.is_full(&inner.root) {
                Self::split_root(inner);
            }
        }

        let mut curr = &mut inner.root;
        while !curr.is_leaf() {
            let (found, i) = {
                let (matched, i) = curr.locate(&entry);
                (matched.is_some(), i)
            };

            if found {
                // The key already exists in an internal node: replace it in
                // place and leave the counters alone.
                curr.put(entry);
                return;
            }

            if self.is_full(curr.child(i)) {
                // Split the child before stepping into it. The old child is
                // consumed by the split; its mid entry moves up into the
                // current node, and the two halves take its place at i and
                // i + 1.
                let (left, right, mid) = curr.take_child(i).split();
                let order = entry.compare(&mid);

                if order == Ordering::Equal {
                    // The new entry carries the mid's own key: the mid was
                    // the stored entry for it, so this is an overwrite. The
                    // new entry is promoted in the mid's place and neither
                    // half holds the key, so the walk is done.
                    curr.put(entry);
                    curr.set_child_at(i, left);
                    curr.put_child_at(i + 1, right);
                    return;
                }

                curr.put(mid);
                curr.set_child_at(i, left);
                curr.put_child_at(i + 1, right);

                curr = curr.child_mut(if order == Ordering::Less { i } else { i + 1 });
            } else {
                curr = curr.child_mut(i);
            }
        }

        // The leaf is guaranteed to have room. A `None` from put means a
        // genuinely new key; an overwrite (possible when the root is itself
        // a leaf) must not bump the size.
        if curr.put(entry).is_none() {
            inner.size += 1;
        }

        // A root that is also a leaf has no parent to split it preemptively
        // on the next insert, so a full root leaf is split right away.
        if inner.root.is_leaf() && self.is_full(&inner.root) {
            Self::split_root(inner);
        }
    }

    /// Split the root and grow a new one above it.
    ///
    /// The old root is consumed by the split; the new root holds just the
    /// promoted mid entry with the two halves as its children. This is the
    /// only place `depth` increases. The insert walk re-enters through the
    /// new root, whose single entry routes the descent to the correct half.
    fn split_root(inner: &mut TreeInner<E>) {
        let old_root = std::mem::replace(&mut inner.root, Node::new());
        let (left, right, mid) = old_root.split();

        let mut new_root = Node::new();
        new_root.put(mid);
        new_root.put_child_at(0, left);
        new_root.put_child_at(1, right);

        inner.root = new_root;
        inner.depth += 1;
    }

    /// A node is full when it holds `2t - 1` entries.
    #[inline]
    fn is_full(&self, node: &Node<E>) -> bool {
        node.entry_count() == max_entries(self.min_degree)
    }
}
