//! Error types for memtree.

use thiserror::Error;

use crate::common::config::MIN_MIN_DEGREE;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in memtree.
///
/// The tree has exactly one failure mode: rejecting a minimum degree that is
/// too small at construction time. Every other operation is total — a missing
/// key is an `Option::None`, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested minimum degree cannot satisfy the B-tree occupancy
    /// bounds (`t - 1` entries per non-root node).
    #[error("minimum degree must be at least {MIN_MIN_DEGREE}, got {0}")]
    InvalidConfiguration(usize),
}
