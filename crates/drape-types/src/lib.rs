//! # drape-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Drape cloth simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Drape crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{DrapeError, DrapeResult};
pub use ids::{ParticleId, PinId, TriangleId};
pub use scalar::Scalar;
