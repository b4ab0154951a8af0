//! Spectre aperiodic monotile tiling generated by iterated substitution
//!
//! Nine supertile symbols expand generation by generation into clusters of
//! placed children, sharing structure through a reference-counted DAG.
//! Geometry is pluggable: an exact integer-lattice backend carries every
//! coordinate without rounding, a floating point backend serves as its
//! validation oracle, and a zero-sized backend drives pure tile censuses.

#![forbid(unsafe_code)]

/// Exact integer arithmetic over the coordinate lattice
pub mod algebra;
/// Tile census tooling
pub mod analysis;
/// Error types and result alias
pub mod error;
/// Geometry strategy trait and its backends
pub mod geometry;
/// Substitution grammar, tile DAG and generation builder
pub mod grammar;

pub use error::{Result, TilingError};
