//! Static collision planes and their projection pass.
//!
//! The cloth is confined to an axis-aligned box built from six
//! inward-facing half-space planes. Planes are immovable,
//! infinite-mass obstacles: penetration is resolved by a hard,
//! non-mass-weighted push-back rather than a weighted PBD projection.

use drape_math::Vec3;
use drape_types::constants::COLLISION_EPSILON;

use crate::state::SimulationState;

/// A static half-space boundary: fixed origin plus unit normal.
/// Points are valid on the side the normal faces.
#[derive(Debug, Clone, Copy)]
pub struct CollisionPlane {
    /// A point on the plane.
    pub origin: Vec3,
    /// Unit normal, facing the valid half-space.
    pub normal: Vec3,
}

impl CollisionPlane {
    /// Creates a plane, normalizing the given normal.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Signed distance of `p` from the plane; negative means
    /// penetrating.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        (p - self.origin).dot(self.normal)
    }
}

/// Six inward-facing planes forming an axis-aligned box spanning
/// `[-extent, extent]` on each axis.
pub fn boundary_box(extent: f32) -> Vec<CollisionPlane> {
    let e = extent;
    vec![
        CollisionPlane::new(Vec3::new(-e, 0.0, 0.0), Vec3::X),
        CollisionPlane::new(Vec3::new(e, 0.0, 0.0), Vec3::NEG_X),
        CollisionPlane::new(Vec3::new(0.0, -e, 0.0), Vec3::Y),
        CollisionPlane::new(Vec3::new(0.0, e, 0.0), Vec3::NEG_Y),
        CollisionPlane::new(Vec3::new(0.0, 0.0, -e), Vec3::Z),
        CollisionPlane::new(Vec3::new(0.0, 0.0, e), Vec3::NEG_Z),
    ]
}

/// Outcome of one collision pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactReport {
    /// Number of point-plane contacts corrected.
    pub resolved: u32,
    /// Deepest penetration encountered (meters).
    pub max_penetration: f32,
}

/// One sweep of plane collision over all unpinned points.
///
/// A predicted position penetrating beyond the tolerance is pushed
/// back along the normal by the full depth; the authoritative
/// position follows by half, and velocity is damped by
/// `1 − damping`. Once a point sits outside every plane the pass
/// leaves it untouched, so re-running is a no-op.
pub fn project(
    planes: &[CollisionPlane],
    state: &mut SimulationState,
    damping: f32,
) -> ContactReport {
    let mut report = ContactReport::default();
    let velocity_scale = 1.0 - damping;

    for i in 0..state.vertex_count {
        if state.inv_mass[i] == 0.0 {
            continue;
        }
        for plane in planes {
            let distance = plane.signed_distance(state.predicted(i));
            if distance < -COLLISION_EPSILON {
                let depth = -distance;
                let push = plane.normal * depth;
                state.set_predicted(i, state.predicted(i) + push);
                state.set_position(i, state.position(i) + push * 0.5);
                state.set_velocity(i, state.velocity(i) * velocity_scale);

                report.resolved += 1;
                report.max_penetration = report.max_penetration.max(depth);
            }
        }
    }

    report
}
