//! Physical constants and simulation defaults.

/// Default gravity vector (m/s²).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -10.0, 0.0];

/// Default simulation timestep (seconds).
pub const DEFAULT_TIME_STEP: f32 = 0.002075;

/// Default number of simulation steps per rendered frame.
pub const DEFAULT_STEPS_PER_FRAME: u32 = 2;

/// Default number of constraint relaxation passes per step.
pub const DEFAULT_RELAXATION_PASSES: u32 = 4;

/// Default half-extent of the axis-aligned boundary box (meters).
pub const DEFAULT_BOUNDARY_EXTENT: f32 = 3.0;

/// Default cloth area density (kg/m²).
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Default stretch stiffness factor in [0, 1].
pub const DEFAULT_STRETCH_STIFFNESS: f32 = 0.9;

/// Default bend stiffness factor in [0, 1]. Zero disables the bend pass.
pub const DEFAULT_BEND_STIFFNESS: f32 = 0.1;

/// Default velocity damping factor applied on plane contact.
pub const DEFAULT_COLLISION_DAMPING: f32 = 0.1;

/// Penetration tolerance for plane collision tests (meters).
pub const COLLISION_EPSILON: f32 = 1.0e-4;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Length below which an edge is treated as degenerate.
pub const DEGENERATE_EDGE_LENGTH: f32 = 1.0e-8;

/// Lumped mass below which a point is treated as immovable
/// rather than infinitely light.
pub const DEGENERATE_MASS_THRESHOLD: f32 = 1.0e-10;
