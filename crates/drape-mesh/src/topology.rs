//! Mesh topology queries.
//!
//! Derives, once at construction, the adjacency data the solver needs
//! from the raw triangle index buffer: the vertex-to-triangle index and
//! the set of bend quads (pairs of triangles sharing exactly one edge).

use std::collections::HashSet;

use crate::mesh::TriangleMesh;
use drape_types::{DrapeError, DrapeResult};

/// Two triangles sharing exactly one edge, modeled as four points
/// for dihedral-angle (folding) constraints.
///
/// ```text
///        wing_a
///        /  \
///       /    \
///  edge_a ── edge_b
///       \    /
///        \  /
///        wing_b
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BendQuad {
    /// First endpoint of the shared edge.
    pub edge_a: u32,
    /// Second endpoint of the shared edge.
    pub edge_b: u32,
    /// Apex vertex of the first triangle (not on the edge).
    pub wing_a: u32,
    /// Apex vertex of the second triangle (not on the edge).
    pub wing_b: u32,
    /// Index of the first triangle.
    pub tri_a: u32,
    /// Index of the second triangle.
    pub tri_b: u32,
}

/// Precomputed topology information for a triangle mesh.
///
/// Built once when a simulation is constructed. The bend quads are the
/// static input to the bend-constraint solver; the vertex-to-triangle
/// index additionally serves adjacency queries in tests and tooling.
#[derive(Debug, Clone)]
pub struct Topology {
    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// Unique bend quads, one per pair of triangles sharing exactly
    /// one edge (two common vertex indices).
    pub bend_quads: Vec<BendQuad>,
}

impl Topology {
    /// Build topology from a triangle mesh.
    ///
    /// Two passes: first the vertex → incident-triangle index, then a
    /// scan of each vertex's incident-triangle pairs for shared edges.
    /// A triangle pair sharing more than two vertices (duplicate or
    /// degenerate geometry) is a fatal input error.
    pub fn build(mesh: &TriangleMesh) -> DrapeResult<Self> {
        let vertex_count = mesh.vertex_count();
        let tri_count = mesh.triangle_count();

        // Pass 1: vertex → triangle adjacency
        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle(t);
            vertex_triangles[a as usize].push(t as u32);
            vertex_triangles[b as usize].push(t as u32);
            vertex_triangles[c as usize].push(t as u32);
        }

        // Pass 2: scan incident-triangle pairs at each vertex.
        // A pair sharing an edge is encountered at both edge endpoints,
        // so pairs are deduplicated before being examined.
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut bend_quads: Vec<BendQuad> = Vec::new();

        for tris in &vertex_triangles {
            for (i, &ta) in tris.iter().enumerate() {
                for &tb in &tris[i + 1..] {
                    let key = if ta < tb { (ta, tb) } else { (tb, ta) };
                    if !seen.insert(key) {
                        continue;
                    }

                    let verts_a = mesh.triangle(key.0 as usize);
                    let verts_b = mesh.triangle(key.1 as usize);

                    let shared: Vec<u32> = verts_a
                        .iter()
                        .copied()
                        .filter(|v| verts_b.contains(v))
                        .collect();

                    match shared.len() {
                        // Only one common vertex: a fan neighbor, no quad.
                        1 => {}
                        2 => {
                            let wing_a = apex_vertex(verts_a, shared[0], shared[1]);
                            let wing_b = apex_vertex(verts_b, shared[0], shared[1]);
                            bend_quads.push(BendQuad {
                                edge_a: shared[0],
                                edge_b: shared[1],
                                wing_a,
                                wing_b,
                                tri_a: key.0,
                                tri_b: key.1,
                            });
                        }
                        _ => {
                            return Err(DrapeError::InvalidTopology(format!(
                                "triangles {} and {} share {} vertices",
                                key.0,
                                key.1,
                                shared.len()
                            )));
                        }
                    }
                }
            }
        }

        Ok(Self {
            vertex_triangles,
            bend_quads,
        })
    }

    /// Returns the number of bend quads.
    pub fn bend_quad_count(&self) -> usize {
        self.bend_quads.len()
    }
}

/// The vertex in a triangle that is not `e0` or `e1` (the apex).
fn apex_vertex(verts: [u32; 3], e0: u32, e1: u32) -> u32 {
    if verts[0] != e0 && verts[0] != e1 {
        verts[0]
    } else if verts[1] != e0 && verts[1] != e1 {
        verts[1]
    } else {
        verts[2]
    }
}
