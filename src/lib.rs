//! memtree - A thread-safe in-memory B-tree with preemptive node splitting.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          memtree                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                 Tree Layer (tree/)                   │   │
//! │  │   BTree<E>: RwLock ∘ {root, size, depth} counters    │   │
//! │  │   top-down preemptive-split insertion, search        │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                             ↓                               │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                Node Layer (tree/node)                │   │
//! │  │   ordered entries + exclusively-owned children       │   │
//! │  │   binary-search locate, in-place put, midpoint split │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                             ↓                               │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │              Entry contract (tree/entry)             │   │
//! │  │       a single three-way comparison capability       │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, Result, degree constants)
//! - [`tree`] - The B-tree, its nodes, and the entry contract
//!
//! # Quick Start
//! ```
//! use std::cmp::Ordering;
//! use memtree::{BTree, Entry};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Record {
//!     key: u64,
//!     value: String,
//! }
//!
//! impl Entry for Record {
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.key.cmp(&other.key)
//!     }
//! }
//!
//! let tree = BTree::new(2).unwrap();
//! tree.insert(Record { key: 1, value: "one".into() });
//! tree.insert(Record { key: 2, value: "two".into() });
//!
//! let found = tree.search(&Record { key: 2, value: String::new() });
//! assert_eq!(found.unwrap().value, "two");
//! ```
//!
//! # Scope
//! The tree supports insertion (with overwrite-on-equal-key semantics) and
//! exact-key search. Deletion, range scans, and persistence are out of
//! scope: this is a pure in-process data structure with no I/O surface.

// Core modules
pub mod common;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::config::MIN_MIN_DEGREE;
pub use common::{Error, Result};
pub use tree::{BTree, Entry};
