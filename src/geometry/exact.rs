//! Exact geometry backed by integer lattice arithmetic

use crate::algebra::point::{Frame, LatticePoint};
use crate::algebra::transform::{AffineTransform, Rotation, validate_rotation_table};
use crate::error::Result;
use crate::geometry::{GeometryStrategy, OUTLINE_POINTS, check_edges};

/// Coefficient rows of the 14 Spectre outline vertices, Spectre frame
const SPECTRE_COEFFICIENTS: [[i64; 4]; OUTLINE_POINTS] = [
    [0, 0, 0, 0],
    [1, 0, 0, 0],
    [2, -1, 0, 0],
    [2, -1, 0, 1],
    [2, -1, 1, 1],
    [3, -1, 1, 1],
    [3, 0, 1, 1],
    [3, 0, 2, 0],
    [3, 0, 2, -1],
    [2, 1, 2, -1],
    [1, 1, 2, -1],
    [0, 1, 2, -1],
    [0, 0, 2, -1],
    [0, 0, 1, 0],
];

/// Exact strategy: integer coefficients end to end
///
/// Coordinates stay on the lattice through every rotation, reflection and
/// translation; the two edge lengths are only consulted when projecting to
/// XY. Construction validates the rotation table once, so transform
/// arithmetic afterwards cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactStrategy {
    edge_a: f64,
    edge_b: f64,
}

impl ExactStrategy {
    /// Build an exact strategy for the given edge lengths
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for non-positive or non-finite
    /// edges, and a malformed transform error if the rotation table fails
    /// its structural self-check.
    pub fn new(edge_a: f64, edge_b: f64) -> Result<Self> {
        check_edges("ExactStrategy::new", edge_a, edge_b)?;
        validate_rotation_table()?;
        Ok(Self { edge_a, edge_b })
    }

    /// Edge length A
    pub const fn edge_a(&self) -> f64 {
        self.edge_a
    }

    /// Edge length B
    pub const fn edge_b(&self) -> f64 {
        self.edge_b
    }
}

impl GeometryStrategy for ExactStrategy {
    type Point = LatticePoint;
    type Transform = AffineTransform;

    fn base_points(&self) -> Result<Vec<Self::Point>> {
        Ok(SPECTRE_COEFFICIENTS
            .iter()
            .map(|&row| LatticePoint::from_coefficients(row, Frame::Spectre))
            .collect())
    }

    fn mystic_points(&self, base: &[Self::Point]) -> Vec<Self::Point> {
        // Same coefficients, read against swapped edge lengths.
        base.iter().map(|p| p.with_frame(Frame::Mystic)).collect()
    }

    fn identity(&self) -> Self::Transform {
        AffineTransform::identity()
    }

    fn rotation(&self, degrees: i32) -> Result<Self::Transform> {
        Ok(AffineTransform::from_rotation(Rotation::from_degrees(
            degrees,
        )?))
    }

    fn placement(
        &self,
        degrees: i32,
        translation: Self::Point,
        mirrored: bool,
    ) -> Result<Self::Transform> {
        Ok(AffineTransform::new(
            Rotation::from_degrees(degrees)?,
            translation,
            mirrored,
        ))
    }

    fn reflect(&self, transform: &Self::Transform) -> Self::Transform {
        transform.reflected()
    }

    fn compose(
        &self,
        outer: &Self::Transform,
        inner: &Self::Transform,
    ) -> Result<Self::Transform> {
        outer.compose(inner)
    }

    fn apply(&self, transform: &Self::Transform, point: &Self::Point) -> Result<Self::Point> {
        transform.apply(point)
    }

    fn difference(&self, lhs: &Self::Point, rhs: &Self::Point) -> Result<Self::Point> {
        lhs.try_sub(rhs)
    }

    fn angle_of(&self, transform: &Self::Transform) -> (i32, i8) {
        transform.angle()
    }

    fn translation_of(&self, transform: &Self::Transform) -> Self::Point {
        transform.translation()
    }

    fn to_xy(&self, point: &Self::Point) -> (f64, f64) {
        point.to_float(self.edge_a, self.edge_b)
    }
}
