//! Floating point geometry, the oracle the exact strategy is checked against

use crate::algebra::point::SQRT3_DIV2;
use crate::error::{Result, unsupported_angle};
use crate::geometry::{GeometryStrategy, check_edges};

/// Plain XY point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatPoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl FloatPoint {
    /// Build a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Column-major 2x3 affine matrix
///
/// `col_x` and `col_y` are the images of the unit vectors; `translation`
/// is the image of the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatTransform {
    col_x: FloatPoint,
    col_y: FloatPoint,
    translation: FloatPoint,
}

impl FloatTransform {
    const IDENTITY: Self = Self {
        col_x: FloatPoint::new(1.0, 0.0),
        col_y: FloatPoint::new(0.0, 1.0),
        translation: FloatPoint::new(0.0, 0.0),
    };

    fn from_degrees(degrees: i32, translation: FloatPoint) -> Self {
        let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
        Self {
            col_x: FloatPoint::new(cos, sin),
            col_y: FloatPoint::new(-sin, cos),
            translation,
        }
    }

    /// Image of a vector under the linear part only
    fn linear(&self, point: FloatPoint) -> FloatPoint {
        FloatPoint::new(
            point.x * self.col_x.x + point.y * self.col_y.x,
            point.x * self.col_x.y + point.y * self.col_y.y,
        )
    }

    /// Determinant of the linear part
    fn determinant(&self) -> f64 {
        self.col_x.x * self.col_y.y - self.col_y.x * self.col_x.y
    }
}

/// Floating point strategy using IEEE trigonometry
///
/// Positions drift by ordinary rounding error, which is exactly why this
/// backend exists: an independent representation the exact strategy must
/// agree with to within tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatStrategy {
    edge_a: f64,
    edge_b: f64,
}

impl FloatStrategy {
    /// Build a floating point strategy for the given edge lengths
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for non-positive or non-finite
    /// edges.
    pub fn new(edge_a: f64, edge_b: f64) -> Result<Self> {
        check_edges("FloatStrategy::new", edge_a, edge_b)?;
        Ok(Self { edge_a, edge_b })
    }

    fn outline(edge_a: f64, edge_b: f64) -> Vec<FloatPoint> {
        let a = edge_a;
        let a_half = edge_a * 0.5;
        let a_tilt = edge_a * SQRT3_DIV2;
        let b = edge_b;
        let b_half = edge_b * 0.5;
        let b_tilt = edge_b * SQRT3_DIV2;
        vec![
            FloatPoint::new(0.0, 0.0),
            FloatPoint::new(a, 0.0),
            FloatPoint::new(a + a_half, -a_tilt),
            FloatPoint::new(a + a_half + b_tilt, -a_tilt + b_half),
            FloatPoint::new(a + a_half + b_tilt, -a_tilt + b_half + b),
            FloatPoint::new(2.0 * a + a_half + b_tilt, -a_tilt + b_half + b),
            FloatPoint::new(3.0 * a + b_tilt, b_half + b),
            FloatPoint::new(3.0 * a, 2.0 * b),
            FloatPoint::new(3.0 * a - b_tilt, b_half + b),
            FloatPoint::new(2.0 * a + a_half - b_tilt, a_tilt + b_half + b),
            FloatPoint::new(a + a_half - b_tilt, a_tilt + b_half + b),
            FloatPoint::new(a_half - b_tilt, a_tilt + b_half + b),
            FloatPoint::new(-b_tilt, b_half + b),
            FloatPoint::new(0.0, b),
        ]
    }

    const fn check_angle(degrees: i32) -> Result<i32> {
        if degrees % 30 == 0 {
            Ok(degrees)
        } else {
            Err(unsupported_angle(degrees))
        }
    }
}

impl GeometryStrategy for FloatStrategy {
    type Point = FloatPoint;
    type Transform = FloatTransform;

    fn base_points(&self) -> Result<Vec<Self::Point>> {
        Ok(Self::outline(self.edge_a, self.edge_b))
    }

    fn mystic_points(&self, _base: &[Self::Point]) -> Vec<Self::Point> {
        // The Mystic outline is the same shape with the edge roles swapped.
        Self::outline(self.edge_b, self.edge_a)
    }

    fn identity(&self) -> Self::Transform {
        FloatTransform::IDENTITY
    }

    fn rotation(&self, degrees: i32) -> Result<Self::Transform> {
        Ok(FloatTransform::from_degrees(
            Self::check_angle(degrees)?,
            FloatPoint::default(),
        ))
    }

    fn placement(
        &self,
        degrees: i32,
        translation: Self::Point,
        mirrored: bool,
    ) -> Result<Self::Transform> {
        let mut transform = FloatTransform::from_degrees(Self::check_angle(degrees)?, translation);
        if mirrored {
            // Mirror the linear part only; the translation is given as the
            // final offset, not a pre-reflection one.
            transform.col_x.x = -transform.col_x.x;
            transform.col_y.x = -transform.col_y.x;
        }
        Ok(transform)
    }

    fn reflect(&self, transform: &Self::Transform) -> Self::Transform {
        FloatTransform {
            col_x: FloatPoint::new(-transform.col_x.x, transform.col_x.y),
            col_y: FloatPoint::new(-transform.col_y.x, transform.col_y.y),
            translation: FloatPoint::new(-transform.translation.x, transform.translation.y),
        }
    }

    fn compose(
        &self,
        outer: &Self::Transform,
        inner: &Self::Transform,
    ) -> Result<Self::Transform> {
        let translation = outer.linear(inner.translation);
        Ok(FloatTransform {
            col_x: outer.linear(inner.col_x),
            col_y: outer.linear(inner.col_y),
            translation: FloatPoint::new(
                translation.x + outer.translation.x,
                translation.y + outer.translation.y,
            ),
        })
    }

    fn apply(&self, transform: &Self::Transform, point: &Self::Point) -> Result<Self::Point> {
        let image = transform.linear(*point);
        Ok(FloatPoint::new(
            image.x + transform.translation.x,
            image.y + transform.translation.y,
        ))
    }

    fn difference(&self, lhs: &Self::Point, rhs: &Self::Point) -> Result<Self::Point> {
        Ok(FloatPoint::new(lhs.x - rhs.x, lhs.y - rhs.y))
    }

    fn angle_of(&self, transform: &Self::Transform) -> (i32, i8) {
        let degrees = transform
            .col_x
            .y
            .atan2(transform.col_x.x)
            .to_degrees()
            .round() as i32;
        if transform.determinant() < 0.0 {
            ((180 - degrees).rem_euclid(360), -1)
        } else {
            (degrees.rem_euclid(360), 1)
        }
    }

    fn translation_of(&self, transform: &Self::Transform) -> Self::Point {
        transform.translation
    }

    fn to_xy(&self, point: &Self::Point) -> (f64, f64) {
        (point.x, point.y)
    }
}
