//! Rotation classes and affine transforms over the coordinate lattice

use crate::algebra::point::LatticePoint;
use crate::error::{Result, malformed_transform, unsupported_angle};

/// 4x4 integer matrix acting on coefficient columns
pub type Matrix4 = [[i64; 4]; 4];

/// Number of supported rotation classes (multiples of 30 degrees)
pub const ROTATION_CLASSES: u8 = 12;

/// Rotation operators for 0, 30, ..., 330 degrees, in class order
///
/// Even classes map each frame to itself; odd classes exchange the Spectre
/// and Mystic frames. The table is read-only and checked once against the
/// group laws by [`validate_rotation_table`].
const ROTATION_MATRICES: [Matrix4; 12] = [
    // 0
    [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]],
    // 30
    [[0, 0, -1, 0], [0, 0, 1, 1], [0, 1, 0, 0], [1, 0, 0, 0]],
    // 60
    [[0, -1, 0, 0], [1, 1, 0, 0], [0, 0, 1, 1], [0, 0, -1, 0]],
    // 90
    [[0, 0, -1, -1], [0, 0, 0, 1], [1, 1, 0, 0], [0, -1, 0, 0]],
    // 120
    [[-1, -1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 1], [0, 0, -1, -1]],
    // 150
    [[0, 0, 0, -1], [0, 0, -1, 0], [1, 0, 0, 0], [-1, -1, 0, 0]],
    // 180
    [[-1, 0, 0, 0], [0, -1, 0, 0], [0, 0, -1, 0], [0, 0, 0, -1]],
    // 210
    [[0, 0, 1, 0], [0, 0, -1, -1], [0, -1, 0, 0], [-1, 0, 0, 0]],
    // 240
    [[0, 1, 0, 0], [-1, -1, 0, 0], [0, 0, -1, -1], [0, 0, 1, 0]],
    // 270
    [[0, 0, 1, 1], [0, 0, 0, -1], [-1, -1, 0, 0], [0, 1, 0, 0]],
    // 300
    [[1, 1, 0, 0], [-1, 0, 0, 0], [0, 0, 0, -1], [0, 0, 1, 1]],
    // 330
    [[0, 0, 0, 1], [0, 0, 1, 0], [-1, 0, 0, 0], [1, 1, 0, 0]],
];

/// Mirror across the y axis, frame preserving
const REFLECTION_MATRIX: Matrix4 = [[-1, -1, 0, 0], [0, 1, 0, 0], [0, 0, 1, 1], [0, 0, 0, -1]];

const fn apply_matrix(matrix: &Matrix4, column: [i64; 4]) -> [i64; 4] {
    let [p0, p1, p2, p3] = column;
    let [r0, r1, r2, r3] = *matrix;
    [
        r0[0] * p0 + r0[1] * p1 + r0[2] * p2 + r0[3] * p3,
        r1[0] * p0 + r1[1] * p1 + r1[2] * p2 + r1[3] * p3,
        r2[0] * p0 + r2[1] * p1 + r2[2] * p2 + r2[3] * p3,
        r3[0] * p0 + r3[1] * p1 + r3[2] * p2 + r3[3] * p3,
    ]
}

const fn transposed(matrix: &Matrix4) -> Matrix4 {
    let [[a, b, c, d], [e, f, g, h], [i, j, k, l], [m, n, o, p]] = *matrix;
    [[a, e, i, m], [b, f, j, n], [c, g, k, o], [d, h, l, p]]
}

const fn matrix_product(lhs: &Matrix4, rhs: &Matrix4) -> Matrix4 {
    let [c0, c1, c2, c3] = transposed(rhs);
    transposed(&[
        apply_matrix(lhs, c0),
        apply_matrix(lhs, c1),
        apply_matrix(lhs, c2),
        apply_matrix(lhs, c3),
    ])
}

const fn class_matrix(index: u8) -> &'static Matrix4 {
    match index {
        1 => &ROTATION_MATRICES[1],
        2 => &ROTATION_MATRICES[2],
        3 => &ROTATION_MATRICES[3],
        4 => &ROTATION_MATRICES[4],
        5 => &ROTATION_MATRICES[5],
        6 => &ROTATION_MATRICES[6],
        7 => &ROTATION_MATRICES[7],
        8 => &ROTATION_MATRICES[8],
        9 => &ROTATION_MATRICES[9],
        10 => &ROTATION_MATRICES[10],
        11 => &ROTATION_MATRICES[11],
        _ => &ROTATION_MATRICES[0],
    }
}

const fn matrices_equal(lhs: &Matrix4, rhs: &Matrix4) -> bool {
    let [a0, a1, a2, a3] = *lhs;
    let [b0, b1, b2, b3] = *rhs;
    rows_equal(a0, b0) && rows_equal(a1, b1) && rows_equal(a2, b2) && rows_equal(a3, b3)
}

const fn rows_equal(lhs: [i64; 4], rhs: [i64; 4]) -> bool {
    lhs[0] == rhs[0] && lhs[1] == rhs[1] && lhs[2] == rhs[2] && lhs[3] == rhs[3]
}

/// Check the rotation and reflection tables against the group laws
///
/// Verifies closure (`R(i) * R(j) = R(i + j)`), the reflection involution
/// (`F * F = I`) and conjugation (`F * R(i) * F = R(-i)`).
///
/// # Errors
///
/// Returns [`TilingError::MalformedTransform`](crate::TilingError::MalformedTransform)
/// naming the first violated identity.
pub fn validate_rotation_table() -> Result<()> {
    let identity = class_matrix(0);
    for i in 0..ROTATION_CLASSES {
        for j in 0..ROTATION_CLASSES {
            let got = matrix_product(class_matrix(i), class_matrix(j));
            let expected = class_matrix((i + j) % ROTATION_CLASSES);
            if !matrices_equal(&got, expected) {
                return Err(malformed_transform(&format!(
                    "closure violated for classes {i} and {j}"
                )));
            }
        }
        let conjugated = matrix_product(
            &REFLECTION_MATRIX,
            &matrix_product(class_matrix(i), &REFLECTION_MATRIX),
        );
        let inverse = class_matrix((ROTATION_CLASSES - i) % ROTATION_CLASSES);
        if !matrices_equal(&conjugated, inverse) {
            return Err(malformed_transform(&format!(
                "reflection conjugation violated for class {i}"
            )));
        }
    }
    let squared = matrix_product(&REFLECTION_MATRIX, &REFLECTION_MATRIX);
    if !matrices_equal(&squared, identity) {
        return Err(malformed_transform(&"reflection is not an involution"));
    }
    Ok(())
}

/// One of the twelve exact rotation classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    index: u8,
}

impl Rotation {
    /// Angular width of one rotation class in degrees
    pub const STEP_DEGREES: i32 = 30;

    /// The zero rotation
    pub const fn identity() -> Self {
        Self { index: 0 }
    }

    /// Resolve an angle in degrees to its rotation class
    ///
    /// Angles normalize modulo 360, so negative multiples of 30 are valid.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::UnsupportedAngle`](crate::TilingError::UnsupportedAngle)
    /// when the angle is not a multiple of 30 degrees.
    pub const fn from_degrees(degrees: i32) -> Result<Self> {
        let normalized = degrees.rem_euclid(360);
        if normalized % Self::STEP_DEGREES != 0 {
            return Err(unsupported_angle(degrees));
        }
        Ok(Self {
            index: (normalized / Self::STEP_DEGREES) as u8,
        })
    }

    /// Class index in `0..12`
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Angle in degrees, in `0..360`
    pub const fn degrees(self) -> i32 {
        self.index as i32 * Self::STEP_DEGREES
    }

    /// Whether this class exchanges the Spectre and Mystic frames
    pub const fn flips_frame(self) -> bool {
        self.index % 2 == 1
    }

    /// The inverse rotation
    pub const fn inverse(self) -> Self {
        Self {
            index: (ROTATION_CLASSES - self.index) % ROTATION_CLASSES,
        }
    }

    /// Sum of two rotation classes
    pub const fn plus(self, other: Self) -> Self {
        Self {
            index: (self.index + other.index) % ROTATION_CLASSES,
        }
    }

    /// Difference of two rotation classes
    pub const fn minus(self, other: Self) -> Self {
        Self {
            index: (ROTATION_CLASSES + self.index - other.index) % ROTATION_CLASSES,
        }
    }

    /// Rotate a point, flipping its frame on odd classes
    pub const fn apply(self, point: &LatticePoint) -> LatticePoint {
        let coefficients = apply_matrix(class_matrix(self.index), point.coefficients());
        let frame = if self.flips_frame() {
            point.frame().flipped()
        } else {
            point.frame()
        };
        LatticePoint::from_coefficients(coefficients, frame)
    }
}

/// Exact affine map `p -> F^s(R(p)) + t`
///
/// The translation is stored post-reflection, so it is always the actual
/// offset of the mapped origin. Composition and reflection follow the affine
/// group laws, which keeps the exact algebra interchangeable with a plain
/// floating point matrix representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineTransform {
    rotation: Rotation,
    mirrored: bool,
    translation: LatticePoint,
}

impl AffineTransform {
    /// Build a transform from its three components
    pub const fn new(rotation: Rotation, translation: LatticePoint, mirrored: bool) -> Self {
        Self {
            rotation,
            mirrored,
            translation,
        }
    }

    /// The identity map
    pub const fn identity() -> Self {
        Self::new(Rotation::identity(), LatticePoint::zero(), false)
    }

    /// A pure rotation about the origin
    pub const fn from_rotation(rotation: Rotation) -> Self {
        Self::new(rotation, LatticePoint::zero(), false)
    }

    /// Rotation class of the linear part
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether the linear part includes the mirror
    pub const fn mirrored(&self) -> bool {
        self.mirrored
    }

    /// Translation component
    pub const fn translation(&self) -> LatticePoint {
        self.translation
    }

    /// Rotation angle and orientation sign `(degrees, +1 | -1)`
    pub const fn angle(&self) -> (i32, i8) {
        let sign = if self.mirrored { -1 } else { 1 };
        (self.rotation.degrees(), sign)
    }

    /// Apply only the linear part (rotation, then mirror)
    pub const fn linear(&self, point: &LatticePoint) -> LatticePoint {
        let rotated = self.rotation.apply(point);
        if self.mirrored { rotated.reflected() } else { rotated }
    }

    /// Apply the full map to a point
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::FrameMismatch`](crate::TilingError::FrameMismatch)
    /// when the rotated point and the translation live in different frames.
    pub fn apply(&self, point: &LatticePoint) -> Result<LatticePoint> {
        self.linear(point).try_add(&self.translation)
    }

    /// Compose two maps so that `compose(a, b).apply(p) = a.apply(b.apply(p))`
    ///
    /// The rotation classes subtract instead of add when the inner map is
    /// mirrored, because the mirror conjugates rotations into their inverses.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::FrameMismatch`](crate::TilingError::FrameMismatch)
    /// when the two translations cannot be combined in one frame.
    pub fn compose(&self, inner: &Self) -> Result<Self> {
        let rotation = if inner.mirrored {
            inner.rotation.minus(self.rotation)
        } else {
            self.rotation.plus(inner.rotation)
        };
        let translation = self.linear(&inner.translation).try_add(&self.translation)?;
        Ok(Self::new(rotation, translation, self.mirrored != inner.mirrored))
    }

    /// Mirror this map across the y axis
    pub const fn reflected(&self) -> Self {
        Self::new(
            self.rotation,
            self.translation.reflected(),
            !self.mirrored,
        )
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
