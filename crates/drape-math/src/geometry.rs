//! Triangle geometry helpers.
//!
//! Small free functions shared by the mass model, the topology
//! extractor, and the bend-constraint solver.

use glam::Vec3;

use drape_types::constants::DEGENERATE_EDGE_LENGTH;

/// Area of the triangle spanned by three points.
///
/// Half the magnitude of the cross product of two edge vectors.
/// Degenerate (collinear) triangles return 0.
#[inline]
pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    0.5 * (p1 - p0).cross(p2 - p0).length()
}

/// Unit face normal of the triangle spanned by three points.
///
/// Returns `None` for degenerate triangles whose cross product
/// is too short to normalize reliably.
#[inline]
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Option<Vec3> {
    let n = (p1 - p0).cross(p2 - p0);
    let len = n.length();
    if len < DEGENERATE_EDGE_LENGTH {
        None
    } else {
        Some(n / len)
    }
}

/// Arccosine with the argument clamped to `[-1, 1]`.
///
/// Dot products of unit vectors drift slightly outside the valid
/// domain under floating point; unclamped `acos` then returns NaN.
#[inline]
pub fn clamped_acos(d: f32) -> f32 {
    d.clamp(-1.0, 1.0).acos()
}

/// Dihedral angle between the two triangle faces spanned from a
/// shared edge: `(p1, p2, p3)` and `(p1, p2, p4)`.
///
/// Computed as the arccosine of the clamped dot product of the two
/// unit face normals. Returns `None` when either face is degenerate.
pub fn dihedral_angle(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> Option<f32> {
    let n1 = face_normal(p1, p2, p3)?;
    let n2 = face_normal(p1, p2, p4)?;
    Some(clamped_acos(n1.dot(n2)))
}
