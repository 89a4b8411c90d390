//! Simulation configuration.
//!
//! Parameters that control solver behavior: gravity, material density,
//! stiffness factors, and the step/pass timing structure.

use serde::{Deserialize, Serialize};

use drape_math::Vec3;
use drape_types::constants;
use drape_types::{DrapeError, DrapeResult};

/// Configuration for the cloth simulation.
///
/// All tunables live here rather than as compile-time constants, so a
/// host can load them from TOML and sweep parameters without rebuilds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Cloth area density (kg/m²). Lumped per-vertex masses scale with it.
    pub density: f32,

    /// Stretch stiffness factor in [0, 1]. Values below 1 under-relax
    /// the correction, approximating compliant material across passes.
    pub stretch_stiffness: f32,

    /// Bend stiffness factor in [0, 1]. Zero disables the bend pass.
    pub bend_stiffness: f32,

    /// Fixed simulation time step (seconds), decoupled from frame rate.
    pub time_step: f32,

    /// Simulation steps executed per rendered frame.
    pub steps_per_frame: u32,

    /// Constraint relaxation passes per step.
    pub relaxation_passes: u32,

    /// Half-extent of the axis-aligned boundary box (meters).
    pub boundary_extent: f32,

    /// Velocity damping factor in [0, 1] applied on plane contact.
    pub collision_damping: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: constants::DEFAULT_GRAVITY,
            density: constants::DEFAULT_DENSITY,
            stretch_stiffness: constants::DEFAULT_STRETCH_STIFFNESS,
            bend_stiffness: constants::DEFAULT_BEND_STIFFNESS,
            time_step: constants::DEFAULT_TIME_STEP,
            steps_per_frame: constants::DEFAULT_STEPS_PER_FRAME,
            relaxation_passes: constants::DEFAULT_RELAXATION_PASSES,
            boundary_extent: constants::DEFAULT_BOUNDARY_EXTENT,
            collision_damping: constants::DEFAULT_COLLISION_DAMPING,
        }
    }
}

impl SimulationConfig {
    /// Creates a config for quick iteration (single step, single pass).
    pub fn draft() -> Self {
        Self {
            steps_per_frame: 1,
            relaxation_passes: 1,
            ..Default::default()
        }
    }

    /// Creates a high-quality config (more relaxation passes).
    pub fn converged() -> Self {
        Self {
            relaxation_passes: 16,
            ..Default::default()
        }
    }

    /// Returns gravity as a `Vec3`.
    #[inline]
    pub fn gravity_vec3(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Validates parameter ranges.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(self.time_step > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.steps_per_frame == 0 {
            return Err(DrapeError::InvalidConfig(
                "steps_per_frame must be at least 1".into(),
            ));
        }
        if self.relaxation_passes == 0 {
            return Err(DrapeError::InvalidConfig(
                "relaxation_passes must be at least 1".into(),
            ));
        }
        if !(self.density > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        for (name, value) in [
            ("stretch_stiffness", self.stretch_stiffness),
            ("bend_stiffness", self.bend_stiffness),
            ("collision_damping", self.collision_damping),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DrapeError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if !(self.boundary_extent > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "boundary_extent must be positive, got {}",
                self.boundary_extent
            )));
        }
        Ok(())
    }
}
