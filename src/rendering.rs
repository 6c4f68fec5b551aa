//! Gizmo overlays: the play-area border and the slingshot aim line.
//!
//! Both run `.after(PhysicsSet)` so they only ever draw post-tick state —
//! the boundary resolver guarantees no particle is drawn out of bounds.

use crate::boundary::ScreenBoundaries;
use crate::graphics::{FROST_1, POLAR_NIGHT_3};
use crate::interaction::SlingshotState;
use bevy::prelude::*;

/// Outline the play-area rectangle.
pub fn border_outline_system(mut gizmos: Gizmos, boundaries: Res<ScreenBoundaries>) {
    let b = boundaries.bounds;
    let corners = [
        Vec2::new(b.min.x, b.min.y),
        Vec2::new(b.max.x, b.min.y),
        Vec2::new(b.max.x, b.max.y),
        Vec2::new(b.min.x, b.max.y),
    ];
    for i in 0..4 {
        gizmos.line_2d(corners[i], corners[(i + 1) % 4], POLAR_NIGHT_3);
    }
}

/// Stretch line from the slingshot anchor to the current cursor position
/// while a drag is in progress.
pub fn aim_line_system(
    mut gizmos: Gizmos,
    state: Res<SlingshotState>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
) {
    let Some(anchor) = state.anchor else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok())
    else {
        return;
    };

    gizmos.line_2d(anchor, cursor, FROST_1);
}
