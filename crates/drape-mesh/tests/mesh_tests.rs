//! Integration tests for drape-mesh.

use drape_mesh::generators::{quad_grid, triangle_pair};
use drape_mesh::normals::compute_vertex_normals;
use drape_mesh::{Topology, TriangleMesh};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0, 0.0, 0.0],
        normal_y: vec![0.0, 0.0, 0.0],
        normal_z: vec![1.0, 1.0, 1.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn triangle_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
}

#[test]
fn validate_ok() {
    let mesh = make_single_triangle();
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = vec![0, 1, 2];
    let mesh = TriangleMesh::from_interleaved(&positions, &indices).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
}

#[test]
fn mesh_json_roundtrip() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.vertex_count(), mesh.vertex_count());
    assert_eq!(recovered.indices, mesh.indices);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_1x1() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-6);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-6);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-6);
}

#[test]
fn triangle_pair_is_valid() {
    let mesh = triangle_pair();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.validate().is_ok());
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn single_triangle_has_no_bend_quads() {
    let mesh = make_single_triangle();
    let topo = Topology::build(&mesh).unwrap();
    assert_eq!(topo.bend_quad_count(), 0);
}

#[test]
fn triangle_pair_has_one_bend_quad() {
    let mesh = triangle_pair();
    let topo = Topology::build(&mesh).unwrap();
    assert_eq!(topo.bend_quad_count(), 1);

    let quad = &topo.bend_quads[0];
    let mut edge = [quad.edge_a, quad.edge_b];
    edge.sort_unstable();
    assert_eq!(edge, [0, 3]); // shared diagonal

    let mut wings = [quad.wing_a, quad.wing_b];
    wings.sort_unstable();
    assert_eq!(wings, [1, 2]);
}

#[test]
fn quad_grid_bend_quad_count() {
    // Interior edges of a 2×2 quad grid: 4 diagonals + 2 horizontal
    // + 2 vertical = 8.
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let topo = Topology::build(&mesh).unwrap();
    assert_eq!(topo.bend_quad_count(), 8);
}

#[test]
fn quad_grid_1x1_bend_quad() {
    // A single quad: the two triangles share the diagonal.
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let topo = Topology::build(&mesh).unwrap();
    assert_eq!(topo.bend_quad_count(), 1);
}

#[test]
fn vertex_triangle_index_covers_all_triangles() {
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    let topo = Topology::build(&mesh).unwrap();

    let mut touched: usize = topo.vertex_triangles.iter().map(Vec::len).sum();
    // Each triangle appears once per vertex — three times total.
    assert_eq!(touched, mesh.triangle_count() * 3);

    // Corner vertex 0 belongs to exactly one triangle on this winding.
    touched = topo.vertex_triangles[0].len();
    assert_eq!(touched, 1);
}

#[test]
fn duplicate_triangle_is_fatal() {
    // Two triangles over the same three vertices share all of them.
    let mesh = TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0; 3],
        normal_y: vec![0.0; 3],
        normal_z: vec![1.0; 3],
        indices: vec![0, 1, 2, 0, 2, 1],
    };
    assert!(Topology::build(&mesh).is_err());
}

#[test]
fn wings_are_off_the_shared_edge() {
    let mesh = quad_grid(4, 4, 1.0, 1.0);
    let topo = Topology::build(&mesh).unwrap();
    for quad in &topo.bend_quads {
        assert_ne!(quad.wing_a, quad.edge_a);
        assert_ne!(quad.wing_a, quad.edge_b);
        assert_ne!(quad.wing_b, quad.edge_a);
        assert_ne!(quad.wing_b, quad.edge_b);
        assert_ne!(quad.wing_a, quad.wing_b);
        assert_ne!(quad.tri_a, quad.tri_b);
    }
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_face_z() {
    let mut mesh = quad_grid(3, 3, 1.0, 1.0);
    compute_vertex_normals(&mut mesh);

    for i in 0..mesh.vertex_count() {
        assert!((mesh.normal_z[i].abs() - 1.0).abs() < 1e-5);
        assert!(mesh.normal_x[i].abs() < 1e-5);
        assert!(mesh.normal_y[i].abs() < 1e-5);
    }
}

#[test]
fn normals_are_unit_length() {
    let mut mesh = quad_grid(4, 4, 2.0, 2.0);
    // Perturb a vertex out of plane so the fan normals disagree.
    mesh.pos_z[6] = 0.3;
    compute_vertex_normals(&mut mesh);

    for i in 0..mesh.vertex_count() {
        let len = (mesh.normal_x[i] * mesh.normal_x[i]
            + mesh.normal_y[i] * mesh.normal_y[i]
            + mesh.normal_z[i] * mesh.normal_z[i])
            .sqrt();
        assert!((len - 1.0).abs() < 1e-5, "normal {} has length {}", i, len);
    }
}
