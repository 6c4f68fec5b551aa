//! Semi-implicit (symplectic) Euler integration.
//!
//! Velocity is updated from the accumulated force *first*, then position is
//! advanced with the already-updated velocity.  That ordering — not
//! "position from old velocity" — is what keeps the scheme stable under
//! stiff opposing forces like drag and damping.

use crate::body::RigidBody;
use bevy::prelude::*;

/// Integrate one body over `dt` seconds and consume its force accumulator.
///
/// `dt > 0` is a hard precondition: a zero or negative delta means the
/// upstream frame clock is broken, and silently skipping would desynchronise
/// physics from rendering, so this asserts instead of tolerating it.
///
/// An immovable body performs no motion but still has any residual force
/// zeroed, so a stray accumulator write can never compound across ticks.
pub fn integrate(transform: &mut Transform, body: &mut RigidBody, dt: f32) {
    assert!(
        dt > 0.0,
        "integrate() requires dt > 0 (got {dt}); frame clock is broken"
    );

    if body.inverse_mass <= 0.0 {
        body.force = Vec2::ZERO;
        return;
    }

    // Velocity first, from the current accumulated force.
    body.velocity += body.force * body.inverse_mass * dt;

    // Position from the *updated* velocity (semi-implicit Euler).
    transform.translation.x += body.velocity.x * dt;
    transform.translation.y += body.velocity.y * dt;

    // Mandatory reset: leftover force would compound unboundedly.
    body.force = Vec2::ZERO;
}

/// System wrapper: integrate every body with the frame's elapsed time.
///
/// Runs under the pipeline's non-zero-delta gate (see
/// [`crate::simulation::clock_has_advanced`]), so the `dt > 0` assert in
/// [`integrate`] holds by construction.
pub fn integrate_bodies_system(time: Res<Time>, mut query: Query<(&mut Transform, &mut RigidBody)>) {
    let dt = time.delta_secs();
    for (mut transform, mut body) in query.iter_mut() {
        integrate(&mut transform, &mut body, dt);
    }
}
