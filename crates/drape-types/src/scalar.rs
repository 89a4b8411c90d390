//! Scalar type alias for the simulation.
//!
//! The solver runs single-threaded on the CPU in `f32`; this alias makes
//! it easy to experiment with `f64` precision if needed.

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
