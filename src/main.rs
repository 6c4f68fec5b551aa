use bevy::prelude::*;
use bevy::window::WindowResolution;

use plink::config::{self, SandboxConfig};
use plink::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use plink::graphics;
use plink::interaction::InteractionPlugin;
use plink::particle::{self, ParticlePlugin};
use plink::rendering;
use plink::simulation::{PhysicsSet, SimulationPlugin};

/// Spawn the resident demo particle at the screen centre, at rest.
///
/// Runs in `PostStartup` so the config has its final (possibly
/// TOML-overridden) values.  Unlike launched particles it carries no
/// lifetime — it stays until the window closes.
fn spawn_initial_particle(mut commands: Commands, config: Res<SandboxConfig>) {
    particle::spawn_particle(&mut commands, Vec2::ZERO, Vec2::ZERO, &config);
    println!("[SETUP] Initial particle spawned");
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plink".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(graphics::POLAR_NIGHT_0))
        // Insert SandboxConfig with compiled defaults; load_sandbox_config
        // overwrites it from assets/sandbox.toml (if present) at startup.
        .insert_resource(SandboxConfig::default())
        .add_plugins((SimulationPlugin, ParticlePlugin, InteractionPlugin))
        .add_systems(
            Startup,
            (
                // Load config first so every later startup system sees the
                // final values.
                config::load_sandbox_config,
                graphics::setup_camera.after(config::load_sandbox_config),
            ),
        )
        .add_systems(PostStartup, spawn_initial_particle)
        .add_systems(
            Update,
            (rendering::border_outline_system, rendering::aim_line_system).after(PhysicsSet),
        )
        .run();
}
