//! Simulation event types.
//!
//! Structured events emitted around each simulation step. Events are
//! lightweight value types carrying just enough data to be useful for
//! monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimEvent {
    /// Simulation step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Simulation step started.
    StepBegin {
        /// Accumulated simulation time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Simulation step completed (prediction, passes, and commit).
    StepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
    },

    /// Boundary contacts corrected during the step's relaxation passes.
    Contacts {
        /// Number of point-plane corrections applied.
        resolved: u32,
        /// Deepest penetration encountered (meters).
        max_penetration: f32,
    },

    /// Energy snapshot at the committed state.
    Energy {
        /// Kinetic energy (0.5 * m * v²).
        kinetic: f64,
        /// Gravitational potential energy.
        potential: f64,
    },

    /// Pin registry changed.
    PinsChanged {
        /// Number of active pins after the change.
        active: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
