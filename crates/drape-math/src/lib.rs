//! # drape-math
//!
//! Linear algebra primitives for the Drape simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat3`, etc.)
//! - Triangle geometry helpers (area, face normal) with degeneracy guards
//! - Clamped inverse trigonometry for dihedral-angle math

pub mod geometry;

// Re-export glam types as the canonical math types for Drape.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
