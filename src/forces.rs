//! Force-generator stages.
//!
//! Every generator has the same contract shape: if the body is immovable
//! (`inverse_mass <= 0`) it must not touch the accumulator (cheap early
//! exit); otherwise it *adds* its contribution into `RigidBody::force` —
//! accumulation, never overwrite.  Generator order is interchangeable
//! (vector addition commutes) but all of them must run strictly before the
//! integrator consumes the accumulator; [`crate::simulation::SimulationPlugin`]
//! pins that order.
//!
//! Each stage is a pure function over component references, wrapped by a
//! thin Bevy system so it stays unit-testable without an ECS world.

use crate::body::{Acceleration, Damping, Drag, Gravity, RigidBody};
use bevy::prelude::*;

// ── Pure stage functions ──────────────────────────────────────────────────────

/// Accumulate the gravity field's contribution.
///
/// Gravity is an acceleration; converting it with `f = m·a` means the
/// integrator's inverse-mass multiply cancels the mass back out and every
/// body falls identically regardless of mass.
pub fn apply_gravity(gravity: &Gravity, body: &mut RigidBody) {
    if body.inverse_mass <= 0.0 {
        return;
    }

    body.force += gravity.0 / body.inverse_mass;
}

/// Accumulate a one-shot external acceleration, then clear it.
///
/// Explicitly single-frame: sustained thrust has to re-set the component
/// every tick.  An immovable body keeps whatever was written — the stage
/// never fires for it.
pub fn apply_acceleration(accel: &mut Acceleration, body: &mut RigidBody) {
    if body.inverse_mass <= 0.0 {
        return;
    }

    body.force += accel.0 / body.inverse_mass;

    // One-shot: consumed this tick.
    accel.0 = Vec2::ZERO;
}

/// Accumulate speed-dependent air resistance opposing the velocity.
///
/// The speed guard doubles as the zero-length-normalisation guard.
pub fn apply_drag(drag: &Drag, body: &mut RigidBody) {
    if body.inverse_mass <= 0.0 {
        return;
    }

    let speed = body.velocity.length();
    if speed <= 0.0 {
        return;
    }

    let magnitude = drag.k1 * speed + drag.k2 * speed * speed;
    if magnitude <= 0.0 {
        return;
    }

    body.force += -magnitude * (body.velocity / speed);
}

/// Accumulate viscous damping: `-coefficient · velocity`.
///
/// No speed guard needed — the term vanishes at zero velocity.
pub fn apply_damping(damping: &Damping, body: &mut RigidBody) {
    if body.inverse_mass <= 0.0 {
        return;
    }

    body.force += -damping.coefficient * body.velocity;
}

// ── Systems ───────────────────────────────────────────────────────────────────

pub fn apply_gravity_system(mut query: Query<(&Gravity, &mut RigidBody)>) {
    for (gravity, mut body) in query.iter_mut() {
        apply_gravity(gravity, &mut body);
    }
}

pub fn apply_acceleration_system(mut query: Query<(&mut Acceleration, &mut RigidBody)>) {
    for (mut accel, mut body) in query.iter_mut() {
        apply_acceleration(&mut accel, &mut body);
    }
}

pub fn apply_drag_system(mut query: Query<(&Drag, &mut RigidBody)>) {
    for (drag, mut body) in query.iter_mut() {
        apply_drag(drag, &mut body);
    }
}

pub fn apply_damping_system(mut query: Query<(&Damping, &mut RigidBody)>) {
    for (damping, mut body) in query.iter_mut() {
        apply_damping(damping, &mut body);
    }
}
