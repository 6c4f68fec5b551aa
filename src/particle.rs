//! Particle spawning, visuals, and lifetime bookkeeping.
//!
//! Particles are spawned by a free function that takes only `&mut Commands`
//! — no `Assets` access needed at spawn time.  `attach_particle_mesh_system`
//! supplies the `Mesh2d` one frame later, which is imperceptible at 60 Hz.
//!
//! A single shared circle-mesh [`ParticleMesh`] resource is created once at
//! startup to avoid per-particle mesh allocation.  Each particle receives
//! its own [`ColorMaterial`] with a slight Frost-tint variation so a pile of
//! particles reads as individual bodies.

use crate::body::{
    Acceleration, CircleCollider, Damping, Drag, Gravity, Lifetime, Particle, RigidBody,
};
use crate::config::SandboxConfig;
use crate::graphics::FROST_1;
use crate::simulation::PhysicsSet;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};
use rand::Rng;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Shared circle mesh used by all particle entities (created once at startup).
#[derive(Resource)]
pub struct ParticleMesh(pub Handle<Mesh>);

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ParticlePlugin;

impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, init_particle_mesh).add_systems(
            Update,
            (
                // Expire between ticks, never mid-pipeline.
                lifetime_system.before(PhysicsSet),
                attach_particle_mesh_system,
            ),
        );
    }
}

/// Create the shared circle mesh from the final config values.
///
/// `PostStartup` so [`crate::config::load_sandbox_config`] has already run.
fn init_particle_mesh(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    config: Res<SandboxConfig>,
) {
    let handle = meshes.add(circle_mesh(
        config.particle_radius,
        config.particle_point_count,
    ));
    commands.insert_resource(ParticleMesh(handle));
}

// ── Spawn helper ──────────────────────────────────────────────────────────────

/// Spawn a particle at `position` with initial `velocity` and the full force
/// stack from the config: gravity, drag, damping, and an (initially idle)
/// impulse accelerator.
///
/// The caller decides about mortality — launched particles get a
/// [`Lifetime`] inserted on top, the resident demo particle does not.
pub fn spawn_particle(
    commands: &mut Commands,
    position: Vec2,
    velocity: Vec2,
    config: &SandboxConfig,
) -> Entity {
    commands
        .spawn((
            Particle,
            CircleCollider {
                radius: config.particle_radius,
            },
            RigidBody {
                inverse_mass: 1.0,
                velocity,
                force: Vec2::ZERO,
            },
            Gravity(config.gravity()),
            Drag {
                k1: config.drag_k1,
                k2: config.drag_k2,
            },
            Damping {
                coefficient: config.damping_coefficient,
            },
            Acceleration::default(),
            Transform::from_translation(position.extend(0.0)),
            Visibility::default(),
        ))
        .id()
}

// ── Update systems ────────────────────────────────────────────────────────────

/// Attach `Mesh2d` + `MeshMaterial2d` to every newly-spawned [`Particle`].
///
/// Uses [`Added<Particle>`] so it only runs for particles that appeared
/// since the last frame — zero overhead for the steady-state population.
pub fn attach_particle_mesh_system(
    mut commands: Commands,
    particle_mesh: Res<ParticleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<Entity, Added<Particle>>,
) {
    let mut rng = rand::thread_rng();
    let base = FROST_1.to_srgba();

    for entity in query.iter() {
        // Slight per-particle tint variation around the Frost base.
        let jitter = rng.gen_range(-0.05_f32..0.05_f32);
        let material = materials.add(ColorMaterial::from_color(Color::srgb(
            (base.red + jitter).clamp(0.0, 1.0),
            (base.green + jitter).clamp(0.0, 1.0),
            (base.blue + jitter).clamp(0.0, 1.0),
        )));
        commands
            .entity(entity)
            .insert((Mesh2d(particle_mesh.0.clone()), MeshMaterial2d(material)));
    }
}

/// Count down every [`Lifetime`] and despawn expired particles.
pub fn lifetime_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in query.iter_mut() {
        lifetime.remaining_secs -= dt;
        if lifetime.remaining_secs <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

// ── Mesh helper ───────────────────────────────────────────────────────────────

/// Build a filled circle mesh approximated by an `n`-sided regular polygon.
///
/// Uses a triangle fan from the centre: `(0, i, i+1 mod n)`.
fn circle_mesh(radius: f32, sides: u32) -> Mesh {
    let n = sides as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(n + 1);

    // Centre vertex.
    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 0.0, 1.0]);
    uvs.push([0.5, 0.5]);

    for i in 0..n {
        let angle = std::f32::consts::TAU * i as f32 / n as f32;
        let x = radius * angle.cos();
        let y = radius * angle.sin();
        positions.push([x, y, 0.0]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([x / (2.0 * radius) + 0.5, y / (2.0 * radius) + 0.5]);
    }

    let mut indices: Vec<u32> = Vec::with_capacity(n * 3);
    for i in 0..n as u32 {
        let v1 = i + 1;
        let v2 = (i + 1) % n as u32 + 1;
        indices.extend_from_slice(&[0, v1, v2]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_mesh_has_centre_plus_rim_vertices() {
        let mesh = circle_mesh(20.0, 16);
        assert_eq!(mesh.count_vertices(), 17);
    }

    #[test]
    fn circle_mesh_triangle_count_matches_sides() {
        let mesh = circle_mesh(20.0, 16);
        let index_count = match mesh.indices().expect("indexed mesh") {
            Indices::U32(v) => v.len(),
            Indices::U16(v) => v.len(),
        };
        assert_eq!(index_count, 16 * 3);
    }
}
