//! Configuration constants for memtree.

/// Smallest minimum degree a tree can be constructed with.
///
/// With `t = 2` every node holds between 1 and 3 entries (a 2-3-4 tree),
/// which is the smallest configuration where splitting a full node leaves
/// both halves with at least `t - 1` entries. Anything below that cannot
/// satisfy the B-tree occupancy bounds, so construction rejects it.
pub const MIN_MIN_DEGREE: usize = 2;

/// Maximum number of entries a node may hold for a given minimum degree.
///
/// A node with exactly this many entries is *full* and must be split before
/// anything descends into it.
#[inline]
pub const fn max_entries(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Minimum number of entries a non-root node must hold for a given minimum
/// degree. The root is exempt: it may hold a single entry, or none at all
/// while the tree is empty.
#[inline]
pub const fn min_entries(min_degree: usize) -> usize {
    min_degree - 1
}
