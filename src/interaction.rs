//! User interaction: slingshot launches, simulation reset, quitting.
//!
//! All of these are out-of-band writes into the physics components — they
//! run strictly `.before(PhysicsSet)` so a launch or reset always lands
//! between ticks, never inside one.
//!
//! Launch gesture: press-and-hold records a world-space anchor, dragging
//! stretches the aim line ([`crate::rendering::aim_line_system`]), and
//! release spawns a particle at the anchor with a velocity proportional to
//! the stretch vector.

use crate::body::{Lifetime, Particle, RigidBody};
use crate::config::SandboxConfig;
use crate::particle::spawn_particle;
use crate::simulation::PhysicsSet;
use bevy::app::AppExit;
use bevy::prelude::*;

// ── Resources ─────────────────────────────────────────────────────────────────

/// World-space anchor of an in-progress slingshot drag, if any.
#[derive(Resource, Debug, Default)]
pub struct SlingshotState {
    pub anchor: Option<Vec2>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SlingshotState>().add_systems(
            Update,
            (
                (slingshot_input_system, reset_system).before(PhysicsSet),
                exit_system,
            ),
        );
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Cursor position in world coordinates, if the cursor is over the window.
fn cursor_world_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec2> {
    window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok())
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Record the drag anchor on press; launch a particle on release.
///
/// Launch velocity is `(release − anchor) · launch_velocity_scale`, and the
/// particle materialises at the anchor — stretch further, throw harder.
/// Launched particles are mortal: they carry a [`Lifetime`].
pub fn slingshot_input_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut state: ResMut<SlingshotState>,
    config: Res<SandboxConfig>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = cursor_world_position(window, camera, camera_transform) else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        state.anchor = Some(cursor);
    }

    if buttons.just_released(MouseButton::Left) {
        if let Some(anchor) = state.anchor.take() {
            let velocity = (cursor - anchor) * config.launch_velocity_scale;
            let entity = spawn_particle(&mut commands, anchor, velocity, &config);
            commands
                .entity(entity)
                .insert(Lifetime::new(config.particle_lifetime_secs));
        }
    }
}

/// `R` restarts the simulation: every particle back to the screen centre,
/// at rest.  A direct overwrite of position and velocity between ticks.
pub fn reset_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Transform, &mut RigidBody), With<Particle>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (mut transform, mut body) in query.iter_mut() {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
        body.velocity = Vec2::ZERO;
    }
    println!("[SIM] Reset: all particles re-centred");
}

/// `Esc` quits.
pub fn exit_system(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
