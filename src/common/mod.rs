//! Common types and utilities shared across memtree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (degree bounds, node capacity)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};
