//! Per-point mass model.
//!
//! Masses are lumped from current triangle areas, not conserved across
//! deformation: each triangle contributes one third of its area times
//! the density constant to each of its three vertices. Recomputed at
//! the start of every step from the authoritative positions.

use drape_math::geometry::triangle_area;
use drape_types::constants::DEGENERATE_MASS_THRESHOLD;

use crate::state::SimulationState;

/// Recompute every point's inverse mass from current triangle areas.
///
/// A point whose lumped mass falls below the degeneracy threshold
/// (all incident triangles collapsed, or no incident triangle at all)
/// gets zero inverse mass — treated as immovable rather than
/// infinitely light.
///
/// Pin overrides are applied separately, after this runs.
pub fn recompute_inverse_masses(state: &mut SimulationState, indices: &[u32], density: f32) {
    let mut lumped = vec![0.0f32; state.vertex_count];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let area = triangle_area(state.position(a), state.position(b), state.position(c));
        let share = area * density / 3.0;
        lumped[a] += share;
        lumped[b] += share;
        lumped[c] += share;
    }

    for (inv, &mass) in state.inv_mass.iter_mut().zip(&lumped) {
        *inv = if mass > DEGENERATE_MASS_THRESHOLD {
            1.0 / mass
        } else {
            0.0
        };
    }
}
