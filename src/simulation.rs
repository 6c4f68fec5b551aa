//! Simulation plugin: the fixed-order physics pipeline.
//!
//! Every tick runs exactly six stages, chained in this order:
//!
//! | # | Stage                               | Reads             | Writes            |
//! |---|-------------------------------------|-------------------|-------------------|
//! | 1 | [`forces::apply_gravity_system`]       | `Gravity`         | force accumulator |
//! | 2 | [`forces::apply_acceleration_system`]  | `Acceleration`    | force accumulator |
//! | 3 | [`forces::apply_drag_system`]          | `Drag`, velocity  | force accumulator |
//! | 4 | [`forces::apply_damping_system`]       | `Damping`, velocity | force accumulator |
//! | 5 | [`integrator::integrate_bodies_system`] | accumulator, `dt` | velocity, position |
//! | 6 | [`boundary::resolve_boundary_collisions_system`] | position, radius | velocity, position |
//!
//! Generators 1–4 commute with each other (vector addition), but the
//! integrator must come after all of them and the resolver after the
//! integrator — that total order is the pipeline's contract and is pinned
//! here with a single `.chain()`.
//!
//! Collaborator systems order themselves against [`PhysicsSet`]: input and
//! out-of-band writes (launch, reset) run `.before()` it, rendering reads
//! positions `.after()` it — so nothing ever observes mid-tick state.

use crate::boundary::{self, ScreenBoundaries};
use crate::config::SandboxConfig;
use crate::{forces, integrator};
use bevy::prelude::*;

/// Label for the whole physics pipeline within the `Update` schedule.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicsSet;

/// Run condition gating the pipeline: Bevy reports a zero delta on the very
/// first frame (and after a hard pause), and the integrator treats a
/// non-positive `dt` as a fatal clock error.  Skipping the *whole* tick
/// keeps that contract honest — no stage runs, so no force leaks into a
/// tick that never integrates.
pub fn clock_has_advanced(time: Res<Time>) -> bool {
    time.delta_secs() > 0.0
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SandboxConfig>()
            .add_systems(PostStartup, init_screen_boundaries)
            .add_systems(
                Update,
                (
                    forces::apply_gravity_system,
                    forces::apply_acceleration_system,
                    forces::apply_drag_system,
                    forces::apply_damping_system,
                    integrator::integrate_bodies_system,
                    boundary::resolve_boundary_collisions_system,
                )
                    .chain()
                    .in_set(PhysicsSet)
                    .run_if(clock_has_advanced),
            );
    }
}

/// Create the [`ScreenBoundaries`] resource from the loaded config.
///
/// Runs in `PostStartup` so every `Startup` system — in particular
/// [`crate::config::load_sandbox_config`] — has already settled the final
/// config values.
fn init_screen_boundaries(mut commands: Commands, config: Res<SandboxConfig>) {
    let bounds = config.play_area();
    commands.insert_resource(ScreenBoundaries { bounds });
    println!(
        "[SETUP] Play area: ({}, {}) to ({}, {})",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    );
}
