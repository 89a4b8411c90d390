//! Integration tests for drape-math.

use drape_math::geometry::{clamped_acos, dihedral_angle, face_normal, triangle_area};
use drape_math::Vec3;

#[test]
fn unit_right_triangle_area() {
    let p0 = Vec3::ZERO;
    let p1 = Vec3::new(1.0, 0.0, 0.0);
    let p2 = Vec3::new(0.0, 1.0, 0.0);
    assert!((triangle_area(p0, p1, p2) - 0.5).abs() < 1e-6);
}

#[test]
fn collinear_triangle_has_zero_area() {
    let p0 = Vec3::ZERO;
    let p1 = Vec3::new(1.0, 0.0, 0.0);
    let p2 = Vec3::new(2.0, 0.0, 0.0);
    assert_eq!(triangle_area(p0, p1, p2), 0.0);
}

#[test]
fn face_normal_is_unit_length() {
    let p0 = Vec3::ZERO;
    let p1 = Vec3::new(2.0, 0.0, 0.0);
    let p2 = Vec3::new(0.0, 2.0, 0.0);
    let n = face_normal(p0, p1, p2).unwrap();
    assert!((n.length() - 1.0).abs() < 1e-6);
    assert!((n - Vec3::Z).length() < 1e-6);
}

#[test]
fn face_normal_rejects_degenerate() {
    let p0 = Vec3::ZERO;
    let p1 = Vec3::new(1.0, 0.0, 0.0);
    assert!(face_normal(p0, p1, p1).is_none());
}

#[test]
fn clamped_acos_survives_drift() {
    // Slightly outside the valid domain — must not produce NaN.
    assert!(!clamped_acos(1.0000001).is_nan());
    assert!(!clamped_acos(-1.0000001).is_nan());
    assert_eq!(clamped_acos(1.0000001), 0.0);
    assert!((clamped_acos(-1.0000001) - std::f32::consts::PI).abs() < 1e-6);
}

#[test]
fn coplanar_wings_have_zero_normal_angle() {
    // Both faces spanned from the shared edge lie in the XY plane
    // with identical winding, so their normals coincide.
    let p1 = Vec3::ZERO;
    let p2 = Vec3::new(1.0, 0.0, 0.0);
    let p3 = Vec3::new(0.5, 1.0, 0.0);
    let p4 = Vec3::new(0.5, 2.0, 0.0);
    let angle = dihedral_angle(p1, p2, p3, p4).unwrap();
    assert!(angle.abs() < 1e-3);
}

#[test]
fn folded_wings_have_right_normal_angle() {
    // One wing in the XY plane, the other folded 90° into XZ.
    let p1 = Vec3::ZERO;
    let p2 = Vec3::new(1.0, 0.0, 0.0);
    let p3 = Vec3::new(0.5, 1.0, 0.0);
    let p4 = Vec3::new(0.5, 0.0, 1.0);
    let angle = dihedral_angle(p1, p2, p3, p4).unwrap();
    assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
}

#[test]
fn dihedral_rejects_degenerate_face() {
    let p1 = Vec3::ZERO;
    let p2 = Vec3::new(1.0, 0.0, 0.0);
    let p3 = Vec3::new(2.0, 0.0, 0.0); // collinear with the edge
    let p4 = Vec3::new(0.5, 1.0, 0.0);
    assert!(dihedral_angle(p1, p2, p3, p4).is_none());
}
