//! Play-area boundary resolution.
//!
//! Runs strictly after integration (it corrects the position the integrator
//! just produced) and before anything renders, so a drawn particle is never
//! outside the play area.

use crate::body::{CircleCollider, RigidBody};
use crate::config::SandboxConfig;
use bevy::prelude::*;

/// Axis-aligned play-area rectangle all circular bodies must remain inside.
///
/// Set once at startup from [`SandboxConfig`]; may be replaced between
/// ticks, read-only during a tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenBoundaries {
    pub bounds: Rect,
}

/// Clamp a circle of `radius` into `bounds` and reflect its velocity on
/// contact.
///
/// X-edge penetration is checked first; Y only via `else`, so an exact
/// corner overlap corrects a single axis per tick.  That asymmetry is a
/// deliberate simplification carried over from the sandbox's bounce rule —
/// the other axis gets corrected on the following tick.
///
/// On any contact the *full* velocity vector is scaled once by
/// `restitution` (< 1) to model energy loss; a clean pass through the
/// interior is a complete no-op.
pub fn resolve_boundary_collision(
    bounds: &Rect,
    radius: f32,
    transform: &mut Transform,
    body: &mut RigidBody,
    restitution: f32,
) {
    let pos = transform.translation.truncate();
    let mut collided = false;

    if pos.x - radius < bounds.min.x || pos.x + radius > bounds.max.x {
        collided = true;
        body.velocity.x *= -1.0;
        transform.translation.x = pos.x.clamp(bounds.min.x + radius, bounds.max.x - radius);
    } else if pos.y - radius < bounds.min.y || pos.y + radius > bounds.max.y {
        collided = true;
        body.velocity.y *= -1.0;
        transform.translation.y = pos.y.clamp(bounds.min.y + radius, bounds.max.y - radius);
    }

    if collided {
        body.velocity *= restitution;
    }
}

/// System wrapper: resolve every collidable body against the shared
/// boundaries.
pub fn resolve_boundary_collisions_system(
    boundaries: Res<ScreenBoundaries>,
    config: Res<SandboxConfig>,
    mut query: Query<(&CircleCollider, &mut Transform, &mut RigidBody)>,
) {
    for (collider, mut transform, mut body) in query.iter_mut() {
        resolve_boundary_collision(
            &boundaries.bounds,
            collider.radius,
            &mut transform,
            &mut body,
            config.restitution,
        );
    }
}
