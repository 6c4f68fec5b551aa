//! Runtime configuration loaded from `assets/sandbox.toml`.
//!
//! [`SandboxConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_sandbox_config`] reads
//! `assets/sandbox.toml` and overwrites the defaults with any values present
//! in the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<SandboxConfig>` to any system parameter list and read
//! values with `config.restitution`, `config.gravity()`, etc.  The resource
//! is only replaced at startup; during a tick it is read-only.

use crate::constants::*;
use crate::error::{
    validate_damping_coefficient, validate_drag_coefficients, validate_restitution, SimResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable physics and interaction configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset in `assets/sandbox.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    // ── Screen & Play Area ───────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub screen_padding: f32,

    // ── Particles ────────────────────────────────────────────────────────────
    pub particle_radius: f32,
    pub particle_point_count: u32,
    pub particle_lifetime_secs: f32,

    // ── Physics ──────────────────────────────────────────────────────────────
    pub gravity_y: f32,
    pub restitution: f32,
    pub drag_k1: f32,
    pub drag_k2: f32,
    pub damping_coefficient: f32,

    // ── Interaction ──────────────────────────────────────────────────────────
    pub launch_velocity_scale: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            // Screen & Play Area
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            screen_padding: SCREEN_PADDING,
            // Particles
            particle_radius: PARTICLE_RADIUS,
            particle_point_count: PARTICLE_POINT_COUNT,
            particle_lifetime_secs: PARTICLE_LIFETIME_SECS,
            // Physics
            gravity_y: GRAVITY_Y,
            restitution: RESTITUTION,
            drag_k1: DRAG_K1,
            drag_k2: DRAG_K2,
            damping_coefficient: DAMPING_COEFFICIENT,
            // Interaction
            launch_velocity_scale: LAUNCH_VELOCITY_SCALE,
        }
    }
}

impl SandboxConfig {
    /// The gravity acceleration field (y-up world).
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity_y)
    }

    /// Play-area rectangle: the window area (centred on the origin) inset by
    /// `screen_padding` on every side.
    pub fn play_area(&self) -> Rect {
        let half = Vec2::new(self.screen_width, self.screen_height) / 2.0;
        Rect::new(
            -half.x + self.screen_padding,
            -half.y + self.screen_padding,
            half.x - self.screen_padding,
            half.y - self.screen_padding,
        )
    }

    /// Reject values the physics stages were not written for.
    pub fn validate(&self) -> SimResult<()> {
        validate_restitution(self.restitution)?;
        validate_drag_coefficients(self.drag_k1, self.drag_k2)?;
        validate_damping_coefficient(self.damping_coefficient)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/sandbox.toml` and overwrite the
/// [`SandboxConfig`] resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  A missing file is silently
/// fine (defaults are already in place); parse or validation errors are
/// reported to stderr and the defaults kept, so a bad TOML can never start
/// the simulation with out-of-range physics.
pub fn load_sandbox_config(mut config: ResMut<SandboxConfig>) {
    let path = "assets/sandbox.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SandboxConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    println!("[SETUP] Loaded sandbox config from {path}");
                }
                Err(e) => {
                    eprintln!("[SETUP] Rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                eprintln!("[SETUP] Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present; defaults are already in place.
            println!("[SETUP] No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_constants() {
        let config = SandboxConfig::default();
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.restitution, RESTITUTION);
        assert_eq!(config.gravity_y, GRAVITY_Y);
        assert_eq!(config.damping_coefficient, DAMPING_COEFFICIENT);
    }

    #[test]
    fn default_config_validates() {
        assert!(SandboxConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: SandboxConfig =
            toml::from_str("restitution = 0.5\ngravity_y = -500.0").expect("valid TOML");
        assert_eq!(config.restitution, 0.5);
        assert_eq!(config.gravity_y, -500.0);
        // Everything else keeps its compiled default.
        assert_eq!(config.particle_radius, PARTICLE_RADIUS);
        assert_eq!(config.drag_k1, DRAG_K1);
    }

    #[test]
    fn out_of_range_restitution_fails_validation() {
        let config: SandboxConfig = toml::from_str("restitution = 1.2").expect("valid TOML");
        assert!(config.validate().is_err());
    }

    #[test]
    fn play_area_is_inset_by_padding() {
        let config = SandboxConfig::default();
        let area = config.play_area();
        assert_eq!(area.min.x, -SCREEN_WIDTH / 2.0 + SCREEN_PADDING);
        assert_eq!(area.max.y, SCREEN_HEIGHT / 2.0 - SCREEN_PADDING);
    }

    #[test]
    fn gravity_points_down() {
        assert!(SandboxConfig::default().gravity().y < 0.0);
    }
}
