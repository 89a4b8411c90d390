//! Stretch (edge length) constraint projection.
//!
//! One constraint per triangle edge occurrence — three per triangle,
//! so interior edges are visited once from each side. Rest lengths are
//! captured lazily on the first evaluation of each constraint and
//! frozen thereafter; whatever configuration exists at that moment
//! becomes the rest state.

use drape_types::constants::DEGENERATE_EDGE_LENGTH;

use crate::state::SimulationState;

/// A single edge-length constraint between two points.
#[derive(Debug, Clone, Copy)]
pub struct StretchConstraint {
    /// First endpoint.
    pub i0: u32,
    /// Second endpoint.
    pub i1: u32,
    /// Rest length. `None` until the constraint is first evaluated;
    /// immutable once captured.
    pub rest_length: Option<f32>,
}

/// Builds the stretch constraints for a triangle index buffer:
/// edge slots (v0,v1), (v1,v2), (v2,v0) of every triangle.
pub fn build_constraints(indices: &[u32]) -> Vec<StretchConstraint> {
    let mut constraints = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            constraints.push(StretchConstraint {
                i0: a,
                i1: b,
                rest_length: None,
            });
        }
    }
    constraints
}

/// One Gauss-Seidel sweep over all stretch constraints.
///
/// Each constraint displaces its predicted endpoints along the edge
/// direction, split by inverse mass and scaled by `stiffness` in
/// [0, 1]. Sub-unity stiffness under-relaxes the correction, relying
/// on repeated passes for convergence. Degenerate edges and fully
/// pinned pairs are skipped for the pass.
pub fn project(constraints: &mut [StretchConstraint], state: &mut SimulationState, stiffness: f32) {
    for constraint in constraints.iter_mut() {
        let i0 = constraint.i0 as usize;
        let i1 = constraint.i1 as usize;

        let p0 = state.predicted(i0);
        let p1 = state.predicted(i1);

        let delta = p1 - p0;
        let length = delta.length();
        if length < DEGENERATE_EDGE_LENGTH {
            continue;
        }

        // First visit wins; the stored value never changes afterwards.
        let rest = *constraint.rest_length.get_or_insert(length);

        let w0 = state.inv_mass[i0];
        let w1 = state.inv_mass[i1];
        let w_sum = w0 + w1;
        if w_sum <= 0.0 {
            continue; // both endpoints pinned
        }

        let correction = stiffness * (length - rest) / w_sum;
        let direction = delta / length;

        state.set_predicted(i0, p0 + direction * (w0 * correction));
        state.set_predicted(i1, p1 - direction * (w1 * correction));
    }
}
