//! The Spectre substitution grammar
//!
//! Nine supertile symbols expand generation by generation into clusters of
//! up to eight children; the Gamma symbol alone bottoms out in two concrete
//! leaf tiles related by a 30 degree rotation. Generations form a DAG in
//! which every cluster holds reference-counted handles into the previous
//! generation, so stepping forward allocates a constant number of nodes.

/// Tile labels and the substitution rule table
pub mod label;
/// Leaf tiles, clusters and traversal
pub mod tile;
/// Generation construction and stepping
pub mod generator;

pub use generator::{Generation, TilingGenerator};
pub use label::{CHILD_SLOTS, LEAF_LABELS, Label, SUBSTITUTION_RULES, SUPERTILES};
pub use tile::{MetaTile, Tile, TileNode};
