//! Centralised physics and interaction constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::SandboxConfig`] mirrors every constant and can override
//! any of them from `assets/sandbox.toml` without recompiling.

// ── Screen & Play Area ────────────────────────────────────────────────────────

/// Window width in pixels.  World units are 1:1 with pixels.
pub const SCREEN_WIDTH: f32 = 1920.0;

/// Window height in pixels.
pub const SCREEN_HEIGHT: f32 = 1080.0;

/// Inset between the window edge and the play-area boundary rectangle.
///
/// Particles bounce off the inset rectangle, not the raw window edge, so the
/// boundary outline stays visible while a particle rests against it.
pub const SCREEN_PADDING: f32 = 5.0;

// ── Particles ─────────────────────────────────────────────────────────────────

/// Bounding (and visual) radius of a spawned particle.
pub const PARTICLE_RADIUS: f32 = 20.0;

/// Segment count for the particle circle mesh.  16 gives a visibly round
/// silhouette at radius 20 without wasting vertices.
pub const PARTICLE_POINT_COUNT: u32 = 16;

/// Seconds a launched particle lives before it is despawned.
pub const PARTICLE_LIFETIME_SECS: f32 = 5.0;

// ── Physics: Gravity ──────────────────────────────────────────────────────────

/// Downward gravitational acceleration (world units/s², y-up world).
///
/// The world is pixel-scaled, so Earth gravity (9.807 m/s²) reads as 980.7
/// at 1 cm/px and 9807 at 1 mm/px.  The larger value makes a 1080-px-tall
/// arena feel snappy; halve it for floatier arcs.
pub const GRAVITY_Y: f32 = -9807.0;

// ── Physics: Collision ────────────────────────────────────────────────────────

/// Fraction of velocity retained after a boundary bounce.
///
/// 1.0 = perfectly elastic (bounces forever), 0.0 = fully inelastic (sticks).
/// Applied once per colliding tick to the full velocity vector.
/// Must stay strictly below 1.0 or bounces never settle.
pub const RESTITUTION: f32 = 0.9;

// ── Physics: Drag ─────────────────────────────────────────────────────────────

/// Linear drag coefficient `k1` — opposing force grows with speed.
///
/// Opposing force magnitude is `k1·speed + k2·speed²`.  At typical launch
/// speeds (hundreds of u/s) the quadratic term dominates; `k1` mostly shapes
/// the slow tail end of a particle's flight.
pub const DRAG_K1: f32 = 0.1;

/// Quadratic drag coefficient `k2` — opposing force grows with speed squared.
pub const DRAG_K2: f32 = 0.001;

// ── Physics: Damping ──────────────────────────────────────────────────────────

/// Viscous damping coefficient: decelerating force is `-coefficient · velocity`.
///
/// Unlike exponential velocity decay this composes with the other force
/// generators through the shared accumulator, and it vanishes naturally at
/// zero velocity.
pub const DAMPING_COEFFICIENT: f32 = 0.4;

// ── Interaction ───────────────────────────────────────────────────────────────

/// Multiplier from slingshot stretch distance (px) to launch speed (u/s).
///
/// A 100-px stretch launches a particle at 1000 u/s.
pub const LAUNCH_VELOCITY_SCALE: f32 = 10.0;
