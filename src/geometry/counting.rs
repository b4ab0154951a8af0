//! Zero-sized geometry for census runs
//!
//! Tile counting only needs the substitution structure, so every point and
//! transform collapses to `()`. Angle validation is kept identical to the
//! concrete backends so misuse fails the same way everywhere.

use crate::error::{Result, unsupported_angle};
use crate::geometry::{GeometryStrategy, OUTLINE_POINTS};

/// Strategy that carries no geometry at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountingStrategy;

impl CountingStrategy {
    /// Build a counting strategy
    pub const fn new() -> Self {
        Self
    }
}

impl GeometryStrategy for CountingStrategy {
    type Point = ();
    type Transform = ();

    fn base_points(&self) -> Result<Vec<Self::Point>> {
        Ok(vec![(); OUTLINE_POINTS])
    }

    fn mystic_points(&self, base: &[Self::Point]) -> Vec<Self::Point> {
        base.to_vec()
    }

    fn identity(&self) -> Self::Transform {}

    fn rotation(&self, degrees: i32) -> Result<Self::Transform> {
        if degrees % 30 == 0 {
            Ok(())
        } else {
            Err(unsupported_angle(degrees))
        }
    }

    fn placement(
        &self,
        degrees: i32,
        _translation: Self::Point,
        _mirrored: bool,
    ) -> Result<Self::Transform> {
        self.rotation(degrees)
    }

    fn reflect(&self, _transform: &Self::Transform) -> Self::Transform {}

    fn compose(
        &self,
        _outer: &Self::Transform,
        _inner: &Self::Transform,
    ) -> Result<Self::Transform> {
        Ok(())
    }

    fn apply(&self, _transform: &Self::Transform, _point: &Self::Point) -> Result<Self::Point> {
        Ok(())
    }

    fn difference(&self, _lhs: &Self::Point, _rhs: &Self::Point) -> Result<Self::Point> {
        Ok(())
    }

    fn angle_of(&self, _transform: &Self::Transform) -> (i32, i8) {
        (0, 1)
    }

    fn translation_of(&self, _transform: &Self::Transform) -> Self::Point {}

    fn to_xy(&self, _point: &Self::Point) -> (f64, f64) {
        (0.0, 0.0)
    }
}
