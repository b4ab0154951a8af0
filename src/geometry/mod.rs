//! Pluggable geometry backends for the substitution generator
//!
//! The generator never touches coordinates directly; it speaks through
//! [`GeometryStrategy`], so the same placement logic can run on exact
//! lattice arithmetic, on plain floating point, or on no geometry at all
//! when only tile counts matter.

use std::fmt;

use crate::error::Result;

/// Exact lattice-backed geometry
pub mod exact;
/// IEEE floating point geometry, the validation oracle
pub mod float;
/// Zero-sized geometry for census runs
pub mod counting;

pub use counting::CountingStrategy;
pub use exact::ExactStrategy;
pub use float::{FloatPoint, FloatStrategy, FloatTransform};

/// Number of vertices on the Spectre outline
pub const OUTLINE_POINTS: usize = 14;

/// Geometric operations the substitution generator is built on
///
/// Implementations must form a faithful affine representation: composing
/// transforms and then applying must equal applying one after the other,
/// and `angle_of` must report the polar decomposition of the linear part.
pub trait GeometryStrategy {
    /// Point representation
    type Point: Clone + fmt::Debug + PartialEq;
    /// Affine transform representation
    type Transform: Clone + fmt::Debug;

    /// The 14-vertex Spectre outline
    ///
    /// # Errors
    ///
    /// Fails when the backing tables or edge lengths are invalid.
    fn base_points(&self) -> Result<Vec<Self::Point>>;

    /// The companion Mystic outline for a given Spectre outline
    fn mystic_points(&self, base: &[Self::Point]) -> Vec<Self::Point>;

    /// The identity transform
    fn identity(&self) -> Self::Transform;

    /// A pure rotation about the origin
    ///
    /// # Errors
    ///
    /// Fails with an unsupported angle error when `degrees` is not a
    /// multiple of 30.
    fn rotation(&self, degrees: i32) -> Result<Self::Transform>;

    /// A rotation followed by a translation, optionally mirrored
    ///
    /// # Errors
    ///
    /// Fails with an unsupported angle error when `degrees` is not a
    /// multiple of 30.
    fn placement(
        &self,
        degrees: i32,
        translation: Self::Point,
        mirrored: bool,
    ) -> Result<Self::Transform>;

    /// Mirror a transform across the y axis
    fn reflect(&self, transform: &Self::Transform) -> Self::Transform;

    /// Affine composition: applying the result equals applying `inner`
    /// first and `outer` second
    ///
    /// # Errors
    ///
    /// Fails when the two transforms cannot be combined, such as a frame
    /// conflict between their translations.
    fn compose(&self, outer: &Self::Transform, inner: &Self::Transform)
    -> Result<Self::Transform>;

    /// Map a point through a transform
    ///
    /// # Errors
    ///
    /// Fails when the transformed point cannot absorb the translation,
    /// such as a frame conflict in exact arithmetic.
    fn apply(&self, transform: &Self::Transform, point: &Self::Point) -> Result<Self::Point>;

    /// Vector from `rhs` to `lhs`
    ///
    /// # Errors
    ///
    /// Fails when the operands live in incompatible frames.
    fn difference(&self, lhs: &Self::Point, rhs: &Self::Point) -> Result<Self::Point>;

    /// Rotation angle and orientation sign of a transform
    fn angle_of(&self, transform: &Self::Transform) -> (i32, i8);

    /// Translation component of a transform
    fn translation_of(&self, transform: &Self::Transform) -> Self::Point;

    /// Project a point to XY coordinates
    fn to_xy(&self, point: &Self::Point) -> (f64, f64);
}

/// Validate a pair of edge lengths shared by the concrete strategies
pub(crate) fn check_edges(operation: &'static str, edge_a: f64, edge_b: f64) -> Result<()> {
    if edge_a.is_finite() && edge_b.is_finite() && edge_a > 0.0 && edge_b > 0.0 {
        Ok(())
    } else {
        Err(crate::error::invalid_argument(
            operation,
            "two positive finite edge lengths",
            &format!("({edge_a}, {edge_b})"),
        ))
    }
}
