//! The simulation facade — construction, step loop, and commit.
//!
//! The host drives one frame as `steps_per_frame` repetitions of
//! `advance_step` + `commit` (or calls [`ClothSim::step_frame`] to do
//! both). Each step: apply pins, recompute lumped masses, predict,
//! then run the relaxation passes (collision → stretch → bend) in
//! strict sequence over the shared predicted-position buffers.

use std::time::Instant;

use drape_math::Vec3;
use drape_mesh::{Topology, TriangleMesh};
use drape_types::{DrapeError, DrapeResult, PinId};

use crate::bending::BendingData;
use crate::collision::{self, CollisionPlane};
use crate::config::SimulationConfig;
use crate::mass;
use crate::pins::{PinConstraint, PinRegistry};
use crate::state::SimulationState;
use crate::stretch::{self, StretchConstraint};

/// Result of one simulation step (or one aggregated frame).
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    /// Point-plane contacts corrected across all relaxation passes.
    pub contacts_resolved: u32,
    /// Deepest penetration encountered (meters).
    pub max_penetration: f32,
    /// Wall-clock time spent (seconds).
    pub wall_time: f64,
}

impl StepReport {
    fn merge(&mut self, other: StepReport) {
        self.contacts_resolved += other.contacts_resolved;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
        self.wall_time += other.wall_time;
    }
}

/// Position-based dynamics cloth simulation over a host-owned mesh.
///
/// Construction derives all topology (bend quads, stretch constraints)
/// from the mesh's triangle index buffer; afterwards the simulation
/// only exchanges vertex positions with the mesh.
pub struct ClothSim {
    config: SimulationConfig,
    state: SimulationState,
    /// Copy of the triangle index buffer, read once at construction.
    indices: Vec<u32>,
    stretch: Vec<StretchConstraint>,
    bending: BendingData,
    planes: Vec<CollisionPlane>,
    pins: PinRegistry,
    steps_taken: u64,
}

impl ClothSim {
    /// Builds a simulation from a mesh and configuration.
    ///
    /// Fails if the configuration is out of range, the mesh is
    /// malformed, or the mesh adjacency is degenerate (a triangle
    /// pair sharing more than two vertices).
    pub fn new(mesh: &TriangleMesh, config: SimulationConfig) -> DrapeResult<Self> {
        config.validate()?;
        mesh.validate()?;

        let topology = Topology::build(mesh)?;
        let bending = BendingData::from_topology(mesh, &topology);
        let stretch = stretch::build_constraints(&mesh.indices);
        let planes = collision::boundary_box(config.boundary_extent);

        Ok(Self {
            state: SimulationState::from_mesh(mesh),
            indices: mesh.indices.clone(),
            stretch,
            bending,
            planes,
            pins: PinRegistry::new(),
            config,
            steps_taken: 0,
        })
    }

    /// Registers a pin constraint and returns its handle.
    ///
    /// The pin takes effect at the start of the next step.
    pub fn add_pin(&mut self, pin: PinConstraint) -> DrapeResult<PinId> {
        if pin.vertex as usize >= self.state.vertex_count {
            return Err(DrapeError::InvalidPin {
                vertex: pin.vertex,
                vertex_count: self.state.vertex_count,
            });
        }
        Ok(self.pins.add(pin))
    }

    /// Moves an active pin's target (e.g., while dragging).
    /// Returns false for stale handles.
    pub fn move_pin(&mut self, id: PinId, target: Vec3) -> bool {
        self.pins.move_target(id, target)
    }

    /// Removes a pin. Unknown handles are a silent no-op; the point
    /// resumes normal dynamics with its mass recomputed next step.
    pub fn remove_pin(&mut self, id: PinId) {
        self.pins.remove(id);
    }

    /// Runs one simulation step: pins, mass model, prediction, and
    /// all relaxation passes. Call [`commit`](Self::commit) afterwards
    /// to finalize and write back.
    pub fn advance_step(&mut self) -> StepReport {
        let start = Instant::now();

        mass::recompute_inverse_masses(&mut self.state, &self.indices, self.config.density);
        self.pins.apply(&mut self.state);
        self.state
            .predict(self.config.time_step, self.config.gravity_vec3());

        let mut report = StepReport::default();
        for _ in 0..self.config.relaxation_passes {
            let contacts = collision::project(
                &self.planes,
                &mut self.state,
                self.config.collision_damping,
            );
            report.contacts_resolved += contacts.resolved;
            report.max_penetration = report.max_penetration.max(contacts.max_penetration);

            stretch::project(
                &mut self.stretch,
                &mut self.state,
                self.config.stretch_stiffness,
            );

            if self.config.bend_stiffness > 0.0 {
                self.bending.project(&mut self.state, self.config.bend_stiffness);
            }
        }

        self.steps_taken += 1;
        report.wall_time = start.elapsed().as_secs_f64();
        report
    }

    /// Finalizes the current step: reconstructs velocities from net
    /// displacement, promotes predictions to positions, and writes
    /// positions back into the host mesh.
    pub fn commit(&mut self, mesh: &mut TriangleMesh) {
        self.state.commit(self.config.time_step);
        self.state.write_back(mesh);
    }

    /// Runs one full frame: `steps_per_frame` × (advance + commit),
    /// returning the aggregated report.
    pub fn step_frame(&mut self, mesh: &mut TriangleMesh) -> StepReport {
        let mut report = StepReport::default();
        for _ in 0..self.config.steps_per_frame {
            report.merge(self.advance_step());
            self.commit(mesh);
        }
        report
    }

    /// Read access to the simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The pin registry.
    pub fn pins(&self) -> &PinRegistry {
        &self.pins
    }

    /// Number of bend elements derived from the mesh.
    pub fn bend_element_count(&self) -> usize {
        self.bending.len()
    }

    /// Number of stretch constraints (three per triangle).
    pub fn stretch_constraint_count(&self) -> usize {
        self.stretch.len()
    }

    /// Number of steps advanced since construction.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }
}
