//! Dihedral bend constraint projection.
//!
//! One bend element per bend quad (two triangles sharing an edge).
//! Each element drives the dihedral angle between the two spanned
//! face normals back toward the angle captured from the initial mesh,
//! using the standard position-based isometric-bending gradients
//! (cross products of the opposite-triangle edge vectors relative to
//! the shared edge).
//!
//! ## Geometry
//!
//! ```text
//!        p3
//!       /  \
//!      /    \
//!    p1 ──── p2
//!      \    /
//!       \  /
//!        p4
//! ```
//!
//! For a flat mesh with consistent winding the two normals are
//! antiparallel, so the rest angle is π.

use drape_math::geometry::{clamped_acos, dihedral_angle};
use drape_math::Vec3;
use drape_mesh::{Topology, TriangleMesh};

use crate::state::SimulationState;

const GRADIENT_EPSILON: f32 = 1.0e-9;

/// A single bend element between two adjacent triangles.
#[derive(Debug, Clone, Copy)]
pub struct BendElement {
    /// First shared-edge endpoint.
    pub p1: usize,
    /// Second shared-edge endpoint.
    pub p2: usize,
    /// Apex of the first triangle.
    pub p3: usize,
    /// Apex of the second triangle.
    pub p4: usize,
    /// Rest dihedral angle (radians), captured at construction.
    pub rest_angle: f32,
}

/// Collection of all bend elements.
#[derive(Debug, Clone, Default)]
pub struct BendingData {
    /// Per-quad bend elements.
    pub elements: Vec<BendElement>,
}

impl BendingData {
    /// Build bend elements from mesh topology.
    ///
    /// One element per bend quad; the rest angle comes from the
    /// mesh's initial configuration. Quads whose initial faces are
    /// degenerate default to the flat angle π.
    pub fn from_topology(mesh: &TriangleMesh, topology: &Topology) -> Self {
        let elements = topology
            .bend_quads
            .iter()
            .map(|quad| {
                let p1 = quad.edge_a as usize;
                let p2 = quad.edge_b as usize;
                let p3 = quad.wing_a as usize;
                let p4 = quad.wing_b as usize;

                let rest_angle = dihedral_angle(
                    mesh.position_vec3(p1),
                    mesh.position_vec3(p2),
                    mesh.position_vec3(p3),
                    mesh.position_vec3(p4),
                )
                .unwrap_or(std::f32::consts::PI);

                BendElement {
                    p1,
                    p2,
                    p3,
                    p4,
                    rest_angle,
                }
            })
            .collect();

        Self { elements }
    }

    /// Returns the number of bend elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if there are no bend elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// One Gauss-Seidel sweep over all bend elements.
    ///
    /// Distributes displacements along the analytic dihedral-angle
    /// gradients, weighted by inverse mass and scaled by the angular
    /// error and `stiffness`. Elements with degenerate faces or a
    /// vanishing gradient denominator are skipped for the pass.
    pub fn project(&self, state: &mut SimulationState, stiffness: f32) {
        for elem in &self.elements {
            let w = [
                state.inv_mass[elem.p1],
                state.inv_mass[elem.p2],
                state.inv_mass[elem.p3],
                state.inv_mass[elem.p4],
            ];
            if w.iter().sum::<f32>() <= 0.0 {
                continue;
            }

            // Work relative to p1.
            let origin = state.predicted(elem.p1);
            let e = state.predicted(elem.p2) - origin;
            let r3 = state.predicted(elem.p3) - origin;
            let r4 = state.predicted(elem.p4) - origin;

            let c3 = e.cross(r3);
            let c4 = e.cross(r4);
            let l3 = c3.length();
            let l4 = c4.length();
            if l3 < GRADIENT_EPSILON || l4 < GRADIENT_EPSILON {
                continue; // degenerate face
            }

            let n1 = c3 / l3;
            let n2 = c4 / l4;
            let d = n1.dot(n2).clamp(-1.0, 1.0);
            let error = clamped_acos(d) - elem.rest_angle;

            // Gradients of the dihedral angle with respect to each point.
            let q3 = (e.cross(n2) + n1.cross(e) * d) / l3;
            let q4 = (e.cross(n1) + n2.cross(e) * d) / l4;
            let q2 = -(r3.cross(n2) + n1.cross(r3) * d) / l3
                - (r4.cross(n1) + n2.cross(r4) * d) / l4;
            let q1 = -q2 - q3 - q4;

            let denom = w[0] * q1.length_squared()
                + w[1] * q2.length_squared()
                + w[2] * q3.length_squared()
                + w[3] * q4.length_squared();
            if denom < GRADIENT_EPSILON {
                continue;
            }

            let scale = stiffness * (1.0 - d * d).max(0.0).sqrt() * error / denom;

            self.displace(state, elem.p1, q1 * (-w[0] * scale));
            self.displace(state, elem.p2, q2 * (-w[1] * scale));
            self.displace(state, elem.p3, q3 * (-w[2] * scale));
            self.displace(state, elem.p4, q4 * (-w[3] * scale));
        }
    }

    #[inline]
    fn displace(&self, state: &mut SimulationState, i: usize, delta: Vec3) {
        let p = state.predicted(i);
        state.set_predicted(i, p + delta);
    }
}
