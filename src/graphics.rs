//! Camera setup and the Nord colour palette.

use bevy::color::Srgba;
use bevy::prelude::*;

// ── Nord palette ──────────────────────────────────────────────────────────────
// https://www.nordtheme.com — Polar Night for chrome, Frost for particles.

const fn nord(r: u8, g: u8, b: u8) -> Color {
    Color::Srgba(Srgba {
        red: r as f32 / 255.0,
        green: g as f32 / 255.0,
        blue: b as f32 / 255.0,
        alpha: 1.0,
    })
}

/// Darkest Polar Night shade — window clear colour.
pub const POLAR_NIGHT_0: Color = nord(0x2E, 0x34, 0x40);

/// Lighter Polar Night shade — play-area border outline.
pub const POLAR_NIGHT_3: Color = nord(0x4C, 0x56, 0x6A);

/// Frost teal — particle fill and the slingshot aim line.
pub const FROST_1: Color = nord(0x8F, 0xBC, 0xBB);

// ── Camera ────────────────────────────────────────────────────────────────────

/// Setup camera for 2D rendering.
///
/// The default `Camera2d` at the origin shows the full window area with
/// world units 1:1 to pixels, which is exactly the play-area coordinate
/// space the physics uses.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}
