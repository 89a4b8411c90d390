//! Integration tests for drape-types.

use drape_types::{DrapeError, ParticleId, PinId, TriangleId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn particle_id_index() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn triangle_id_index() {
    let id = TriangleId(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_not_interchangeable() {
    // Compile-time guarantee — these types are distinct.
    let _p = ParticleId(0);
    let _t = TriangleId(0);
    let _h = PinId(0);
}

#[test]
fn ids_are_serializable() {
    let id = PinId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: PinId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = DrapeError::InvalidTopology("triangles 3 and 7 share 3 vertices".into());
    assert!(err.to_string().contains("share 3 vertices"));
}

#[test]
fn invalid_pin_display() {
    let err = DrapeError::InvalidPin {
        vertex: 99,
        vertex_count: 16,
    };
    let msg = err.to_string();
    assert!(msg.contains("99"));
    assert!(msg.contains("16"));
}
