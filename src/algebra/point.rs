//! Lattice points over the basis `{A, A*sqrt(3)/2, B, B*sqrt(3)/2}`

use std::fmt;

use crate::error::{Result, frame_mismatch};

/// Half of sqrt(3), the only irrational constant in the projection
pub const SQRT3_DIV2: f64 = 0.866_025_403_784_438_6;

/// Coordinate frame a lattice point is expressed in
///
/// The Spectre outline and its Mystic companion use the same integer
/// coefficients but read them against swapped edge lengths, so the frame
/// travels with every point. Odd rotation classes exchange the two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Coefficients read against edges (A, B)
    Spectre,
    /// Coefficients read against edges (B, A)
    Mystic,
    /// The zero point, compatible with either frame
    Neutral,
}

impl Frame {
    /// Frame produced by an odd rotation class
    pub const fn flipped(self) -> Self {
        match self {
            Self::Spectre => Self::Mystic,
            Self::Mystic => Self::Spectre,
            Self::Neutral => Self::Neutral,
        }
    }

    /// Unify two operand frames for additive arithmetic
    const fn unify(operation: &'static str, lhs: Self, rhs: Self) -> Result<Self> {
        match (lhs, rhs) {
            (Self::Neutral, other) | (other, Self::Neutral) => Ok(other),
            (Self::Spectre, Self::Spectre) => Ok(Self::Spectre),
            (Self::Mystic, Self::Mystic) => Ok(Self::Mystic),
            _ => Err(frame_mismatch(operation, lhs, rhs)),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spectre => write!(f, "spectre"),
            Self::Mystic => write!(f, "mystic"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Exact point on the tiling lattice
///
/// Stored as coefficients `(a0, a1, b0, b1)` of the basis
/// `{A, A*sqrt(3)/2, B, B*sqrt(3)/2}` plus a [`Frame`] tag. The all-zero
/// point always normalizes to [`Frame::Neutral`], so structural equality and
/// hashing treat zero identically regardless of how it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    coefficients: [i64; 4],
    frame: Frame,
}

impl LatticePoint {
    /// Build a point, canonicalizing zero to the neutral frame
    pub const fn new(a0: i64, a1: i64, b0: i64, b1: i64, frame: Frame) -> Self {
        let frame = if a0 == 0 && a1 == 0 && b0 == 0 && b1 == 0 {
            Frame::Neutral
        } else {
            frame
        };
        Self {
            coefficients: [a0, a1, b0, b1],
            frame,
        }
    }

    /// Build a point from a coefficient row
    pub const fn from_coefficients(coefficients: [i64; 4], frame: Frame) -> Self {
        let [a0, a1, b0, b1] = coefficients;
        Self::new(a0, a1, b0, b1, frame)
    }

    /// The origin
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, Frame::Neutral)
    }

    /// Whether all four coefficients vanish
    pub const fn is_zero(&self) -> bool {
        matches!(self.frame, Frame::Neutral)
    }

    /// Frame tag of this point
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// Coefficient row `(a0, a1, b0, b1)`
    pub const fn coefficients(&self) -> [i64; 4] {
        self.coefficients
    }

    /// Retag this point into another frame, leaving coefficients untouched
    pub const fn with_frame(&self, frame: Frame) -> Self {
        Self::from_coefficients(self.coefficients, frame)
    }

    /// Frame-checked addition
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::FrameMismatch`](crate::TilingError::FrameMismatch)
    /// when one operand is Spectre-framed and the other Mystic-framed.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let frame = Frame::unify("add", self.frame, other.frame)?;
        let [a0, a1, b0, b1] = self.coefficients;
        let [c0, c1, d0, d1] = other.coefficients;
        Ok(Self::new(a0 + c0, a1 + c1, b0 + d0, b1 + d1, frame))
    }

    /// Frame-checked subtraction
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::FrameMismatch`](crate::TilingError::FrameMismatch)
    /// when one operand is Spectre-framed and the other Mystic-framed.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        let frame = Frame::unify("sub", self.frame, other.frame)?;
        let [a0, a1, b0, b1] = self.coefficients;
        let [c0, c1, d0, d1] = other.coefficients;
        Ok(Self::new(a0 - c0, a1 - c1, b0 - d0, b1 - d1, frame))
    }

    /// Additive inverse, frame preserved
    pub const fn negated(&self) -> Self {
        let [a0, a1, b0, b1] = self.coefficients;
        Self::new(-a0, -a1, -b0, -b1, self.frame)
    }

    /// Mirror across the y axis, frame preserved
    ///
    /// This is the action of the fixed reflection matrix on the coefficient
    /// column; under projection it negates the x coordinate in both frames.
    pub const fn reflected(&self) -> Self {
        let [a0, a1, b0, b1] = self.coefficients;
        Self::new(-a0 - a1, a1, b0 + b1, -b1, self.frame)
    }

    /// Project to XY coordinates for the given edge lengths
    ///
    /// The Mystic frame reads the same coefficients with the roles of the
    /// two edges exchanged; the neutral zero projects to the origin.
    pub fn to_float(&self, edge_a: f64, edge_b: f64) -> (f64, f64) {
        let [a0, a1, b0, b1] = self.coefficients;
        let (a0, a1, b0, b1) = (a0 as f64, a1 as f64, b0 as f64, b1 as f64);
        match self.frame {
            Frame::Spectre => (
                edge_a * (2.0 * a0 + a1) * 0.5 + edge_b * b1 * SQRT3_DIV2,
                edge_a * a1 * SQRT3_DIV2 + edge_b * (2.0 * b0 + b1) * 0.5,
            ),
            Frame::Mystic => (
                edge_a * b1 * SQRT3_DIV2 + edge_b * (2.0 * a0 + a1) * 0.5,
                edge_a * (2.0 * b0 + b1) * 0.5 + edge_b * a1 * SQRT3_DIV2,
            ),
            Frame::Neutral => (0.0, 0.0),
        }
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1, b0, b1] = self.coefficients;
        write!(f, "({a0},{a1},{b0},{b1})@{}", self.frame)
    }
}
