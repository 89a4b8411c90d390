//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating face normals
//! from each adjacent triangle. The host renderer consumes these after
//! each committed frame.

use crate::mesh::TriangleMesh;
use drape_math::Vec3;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated at
/// each vertex, then the result is normalized. Modifies the mesh's
/// `normal_x`, `normal_y`, `normal_z` arrays in place.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();

    for i in 0..n {
        mesh.normal_x[i] = 0.0;
        mesh.normal_y[i] = 0.0;
        mesh.normal_z[i] = 0.0;
    }

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let (a, b, c) = (ia as usize, ib as usize, ic as usize);

        let p0 = mesh.position_vec3(a);
        let p1 = mesh.position_vec3(b);
        let p2 = mesh.position_vec3(c);

        // Unnormalized cross product: magnitude = 2 × triangle area,
        // which gives the area weighting for free.
        let face = (p1 - p0).cross(p2 - p0);

        for &v in &[a, b, c] {
            mesh.normal_x[v] += face.x;
            mesh.normal_y[v] += face.y;
            mesh.normal_z[v] += face.z;
        }
    }

    for i in 0..n {
        let v = Vec3::new(mesh.normal_x[i], mesh.normal_y[i], mesh.normal_z[i]);
        let len = v.length();
        if len > 1e-10 {
            let unit = v / len;
            mesh.normal_x[i] = unit.x;
            mesh.normal_y[i] = unit.y;
            mesh.normal_z[i] = unit.z;
        }
    }
}
