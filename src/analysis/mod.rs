//! Tile census tooling
//!
//! Counts leaves per label without building any geometry, by two
//! independent routes that must agree: direct frequency iteration of the
//! rule table with checked arithmetic, and a matrix recurrence evaluated
//! with `ndarray`.

/// Census computation and the per-label count table
pub mod counts;

pub use counts::{LabelCounts, recurrence_counts, substitution_counts};
