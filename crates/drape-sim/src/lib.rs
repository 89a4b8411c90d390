//! # drape-sim
//!
//! The Drape simulation core: a Position-Based Dynamics cloth solver.
//!
//! Each simulation step predicts positions from velocity and gravity,
//! runs a fixed number of Gauss-Seidel relaxation passes over the
//! collision, stretch, and bend constraints, then commits the result,
//! reconstructing velocity from net displacement.
//!
//! ## Key Types
//!
//! - [`ClothSim`] — The simulation facade the host drives each frame
//! - [`SimulationConfig`] — Tunable parameters (gravity, stiffness, timing)
//! - [`SimulationState`] — SoA buffers for positions, velocities, masses
//! - [`PinRegistry`] — Arena of externally driven pin constraints

pub mod bending;
pub mod collision;
pub mod config;
pub mod mass;
pub mod pins;
pub mod solver;
pub mod state;
pub mod stretch;

pub use config::SimulationConfig;
pub use pins::{PinConstraint, PinRegistry};
pub use solver::{ClothSim, StepReport};
pub use state::SimulationState;
