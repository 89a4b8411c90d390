//! Simulation state — SoA buffers for all per-point data.
//!
//! This is the primary mutable data structure during simulation.
//! Positions are authoritative; predicted positions are the working
//! values the constraint passes relax in place.

use drape_math::Vec3;
use drape_mesh::TriangleMesh;

/// SoA simulation state buffers.
///
/// All arrays have length `vertex_count`. The mesh collaborator owns
/// the canonical vertex buffer; positions are copied in once at
/// construction and written back at each commit.
pub struct SimulationState {
    /// Number of points.
    pub vertex_count: usize,

    // ─── Position (current, authoritative) ───
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    // ─── Predicted position (working value during a step) ───
    pub pred_x: Vec<f32>,
    pub pred_y: Vec<f32>,
    pub pred_z: Vec<f32>,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,

    /// Per-point inverse mass. Recomputed every step from current
    /// triangle areas; zero means immovable (pinned or degenerate).
    pub inv_mass: Vec<f32>,
}

impl SimulationState {
    /// Initialize state from a mesh: positions and predictions copy
    /// the mesh vertices, velocities start at zero.
    ///
    /// Inverse masses start at zero; the mass model fills them in at
    /// the beginning of each step.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let n = mesh.vertex_count();
        Self {
            vertex_count: n,
            pos_x: mesh.pos_x.clone(),
            pos_y: mesh.pos_y.clone(),
            pos_z: mesh.pos_z.clone(),
            pred_x: mesh.pos_x.clone(),
            pred_y: mesh.pos_y.clone(),
            pred_z: mesh.pos_z.clone(),
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            inv_mass: vec![0.0; n],
        }
    }

    /// A state of `n` points at the origin, at rest, with zero
    /// inverse mass. Useful for tests and tooling.
    pub fn zeroed(n: usize) -> Self {
        Self {
            vertex_count: n,
            pos_x: vec![0.0; n],
            pos_y: vec![0.0; n],
            pos_z: vec![0.0; n],
            pred_x: vec![0.0; n],
            pred_y: vec![0.0; n],
            pred_z: vec![0.0; n],
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            inv_mass: vec![0.0; n],
        }
    }

    /// Returns the authoritative position of point `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the predicted position of point `i`.
    #[inline]
    pub fn predicted(&self, i: usize) -> Vec3 {
        Vec3::new(self.pred_x[i], self.pred_y[i], self.pred_z[i])
    }

    /// Returns the velocity of point `i`.
    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::new(self.vel_x[i], self.vel_y[i], self.vel_z[i])
    }

    /// Sets the authoritative position of point `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Sets the predicted position of point `i`.
    #[inline]
    pub fn set_predicted(&mut self, i: usize, p: Vec3) {
        self.pred_x[i] = p.x;
        self.pred_y[i] = p.y;
        self.pred_z[i] = p.z;
    }

    /// Sets the velocity of point `i`.
    #[inline]
    pub fn set_velocity(&mut self, i: usize, v: Vec3) {
        self.vel_x[i] = v.x;
        self.vel_y[i] = v.y;
        self.vel_z[i] = v.z;
    }

    /// Predictor: integrate gravity into velocity for unpinned points,
    /// then advance predicted positions explicitly.
    ///
    /// `velocity += dt * gravity; predicted = position + dt * velocity`
    ///
    /// Runs once per simulation step, not per relaxation pass.
    pub fn predict(&mut self, dt: f32, gravity: Vec3) {
        for i in 0..self.vertex_count {
            if self.inv_mass[i] > 0.0 {
                self.vel_x[i] += dt * gravity.x;
                self.vel_y[i] += dt * gravity.y;
                self.vel_z[i] += dt * gravity.z;
            }
            self.pred_x[i] = self.pos_x[i] + dt * self.vel_x[i];
            self.pred_y[i] = self.pos_y[i] + dt * self.vel_y[i];
            self.pred_z[i] = self.pos_z[i] + dt * self.vel_z[i];
        }
    }

    /// Commit: reconcile predicted positions into authoritative state.
    ///
    /// `velocity = (predicted − position) / dt; position = predicted`
    ///
    /// The sole place velocity is derived — it is reconstructed from
    /// the net displacement the constraint passes achieved, never
    /// integrated from force after prediction.
    pub fn commit(&mut self, dt: f32) {
        let inv_dt = 1.0 / dt;
        for i in 0..self.vertex_count {
            self.vel_x[i] = (self.pred_x[i] - self.pos_x[i]) * inv_dt;
            self.vel_y[i] = (self.pred_y[i] - self.pos_y[i]) * inv_dt;
            self.vel_z[i] = (self.pred_z[i] - self.pos_z[i]) * inv_dt;
        }
        self.pos_x.copy_from_slice(&self.pred_x);
        self.pos_y.copy_from_slice(&self.pred_y);
        self.pos_z.copy_from_slice(&self.pred_z);
    }

    /// Write authoritative positions back to the externally owned mesh.
    pub fn write_back(&self, mesh: &mut TriangleMesh) {
        mesh.pos_x.copy_from_slice(&self.pos_x);
        mesh.pos_y.copy_from_slice(&self.pos_y);
        mesh.pos_z.copy_from_slice(&self.pos_z);
    }

    /// Total kinetic energy: 0.5 * Σ m_i * ||v_i||².
    ///
    /// Points with zero inverse mass (pinned) carry no kinetic energy.
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.vertex_count {
            if self.inv_mass[i] > 0.0 {
                let m = 1.0f64 / self.inv_mass[i] as f64;
                let vx = self.vel_x[i] as f64;
                let vy = self.vel_y[i] as f64;
                let vz = self.vel_z[i] as f64;
                energy += 0.5 * m * (vx * vx + vy * vy + vz * vz);
            }
        }
        energy
    }

    /// Gravitational potential energy relative to the origin:
    /// −Σ m_i * (gravity · p_i).
    pub fn potential_energy(&self, gravity: Vec3) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.vertex_count {
            if self.inv_mass[i] > 0.0 {
                let m = 1.0f64 / self.inv_mass[i] as f64;
                let dot = gravity.x as f64 * self.pos_x[i] as f64
                    + gravity.y as f64 * self.pos_y[i] as f64
                    + gravity.z as f64 * self.pos_z[i] as f64;
                energy -= m * dot;
            }
        }
        energy
    }
}
