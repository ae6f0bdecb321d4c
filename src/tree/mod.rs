//! The B-tree and its building blocks.
//!
//! # Components
//! - [`BTree`] - The thread-safe tree: lock, counters, search, insert
//! - [`Entry`] - The three-way-comparison contract stored values provide
//! - `Node` (internal) - Entry/child storage and the midpoint split

mod btree;
mod entry;
pub(crate) mod node;

pub use btree::BTree;
pub use entry::Entry;
