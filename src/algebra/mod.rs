//! Exact integer arithmetic over the Spectre coordinate lattice
//!
//! Every coordinate the substitution system produces lives in the module
//! `Z*A + Z*A*sqrt(3)/2 + Z*B + Z*B*sqrt(3)/2`, so points are stored as four
//! integer coefficients and all rotations, reflections and translations stay
//! exact. Floating point appears only at the final projection to XY.

/// Lattice points with frame tags and frame-checked arithmetic
pub mod point;
/// Rotation classes, the reflection matrix and affine transforms
pub mod transform;

pub use point::{Frame, LatticePoint};
pub use transform::{AffineTransform, Rotation};
