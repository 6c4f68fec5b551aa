//! Rigid body and force-generator ECS components.
//!
//! Each component is leaf data with no behaviour of its own; the per-tick
//! systems in [`crate::forces`], [`crate::integrator`] and [`crate::boundary`]
//! read and write them in a fixed order.  [`RigidBody`] and Bevy's
//! `Transform` are two independently-addressable facets of the same entity;
//! the integrator is the single place that bridges them.

use crate::error::{validate_inverse_mass, SimResult};
use bevy::prelude::*;

// ── Motion state ──────────────────────────────────────────────────────────────

/// Linear motion state of a simulated body.
///
/// `inverse_mass` of 0 denotes infinite mass: every stage early-exits on
/// `inverse_mass <= 0`, so an immovable body needs no sentinel or branch
/// elsewhere.  `force` is a transient per-tick accumulator — zero at the
/// start of every tick, sums the force-generator contributions, and is
/// zeroed again when the integrator consumes it.
#[derive(Component, Debug, Clone, Copy)]
pub struct RigidBody {
    /// `1/mass`; 0 = immovable.  Never negative (see [`RigidBody::new`]).
    pub inverse_mass: f32,
    /// World-space linear velocity (u/s).  Written only by the integrator
    /// and the boundary resolver.
    pub velocity: Vec2,
    /// Per-tick force accumulator.  Written by the force generators,
    /// consumed and reset by the integrator.
    pub force: Vec2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            inverse_mass: 1.0,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
        }
    }
}

impl RigidBody {
    /// Body at rest with the given inverse mass.
    ///
    /// Rejects negative (or non-finite) inverse mass here so the per-tick
    /// stages only ever see values their `<= 0` guards were written for.
    pub fn new(inverse_mass: f32) -> SimResult<Self> {
        validate_inverse_mass(inverse_mass)?;
        Ok(Self {
            inverse_mass,
            ..Default::default()
        })
    }

    /// Body at rest with mass `mass` (must be > 0; use [`RigidBody::immovable`]
    /// for infinite mass).
    pub fn from_mass(mass: f32) -> SimResult<Self> {
        Self::new(1.0 / mass)
    }

    /// Infinite-mass body: no force generator or integration step moves it.
    pub fn immovable() -> Self {
        Self {
            inverse_mass: 0.0,
            ..Default::default()
        }
    }

    /// Body mass, or `None` for an immovable body.
    pub fn mass(&self) -> Option<f32> {
        (self.inverse_mass > 0.0).then(|| 1.0 / self.inverse_mass)
    }
}

// ── Force generators ──────────────────────────────────────────────────────────

/// Constant acceleration field (u/s²), e.g. gravity.
///
/// An acceleration, not a force: the generator converts it using the body's
/// mass so that after integration every attached body accelerates
/// identically regardless of mass.
#[derive(Component, Debug, Clone, Copy)]
pub struct Gravity(pub Vec2);

impl Default for Gravity {
    /// Earth gravity at 1 cm/px, y-up.
    fn default() -> Self {
        Self(Vec2::new(0.0, -980.7))
    }
}

/// Speed-dependent air resistance with magnitude `k1·speed + k2·speed²`,
/// applied opposite the velocity direction.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Drag {
    /// Linear coefficient (≥ 0).
    pub k1: f32,
    /// Quadratic coefficient (≥ 0).
    pub k2: f32,
}

/// Viscous damping: decelerating force `-coefficient · velocity`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Damping {
    /// Damping strength (≥ 0).
    pub coefficient: f32,
}

/// One-shot externally-set acceleration (u/s²), e.g. a launch impulse.
///
/// Consumed and zeroed by its generator stage the tick after it is set;
/// external code wanting a sustained push must re-set it every tick.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Acceleration(pub Vec2);

// ── Collision & lifecycle ─────────────────────────────────────────────────────

/// World-space bounding radius used by the boundary resolver (and as the
/// visual circle radius).
#[derive(Component, Debug, Clone, Copy)]
pub struct CircleCollider {
    pub radius: f32,
}

/// Marker for a launched sandbox particle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Particle;

/// Remaining lifetime of a launched particle; the entity is despawned when
/// it reaches zero.
#[derive(Component, Debug, Clone, Copy)]
pub struct Lifetime {
    pub remaining_secs: f32,
}

impl Lifetime {
    pub fn new(secs: f32) -> Self {
        Self {
            remaining_secs: secs,
        }
    }
}
