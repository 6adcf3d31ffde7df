use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledTrash, Trash, TrashState};
use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

/// Where inactive pool members sit: well under the water plane, out of any
/// camera's view volume.
pub const PARK_POSITION: Vec3 = Vec3::new(0.0, -60.0, 0.0);

/// Pick-ray target radius around a trash entity, pre-scale.
pub const PICK_RADIUS: f32 = 1.6;

#[derive(Resource, Debug)]
pub struct TrashPool {
    pub free: Vec<Entity>,
    pub capacity: usize,
}

impl TrashPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Entities currently out of the free list: drifting or pending recycle.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.capacity - self.free.len()
    }
}

/// Shared template assets, built once and cloned (by handle) into every pool
/// member.
#[derive(Resource, Debug, Clone)]
pub struct TrashAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Active trash is visible to the pick ray via its Trash membership.
/// Filters stay empty: nothing in this scene resolves contacts.
#[inline]
pub fn active_trash_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Trash, [] as [Layer; 0])
}

/// "Disabled" without structural changes: no memberships means spatial
/// queries never see the collider.
#[inline]
pub fn inactive_trash_layers() -> CollisionLayers {
    CollisionLayers::new([] as [Layer; 0], [] as [Layer; 0])
}

/// Pre-spawn the whole trash pool (inactive).
///
/// Physics components stay present for the entity's whole life; activation and
/// recycling only rewrite values, so the pool never causes archetype moves.
pub fn init_trash_pool(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut pool: ResMut<TrashPool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // One barrel mesh + one material for the entire population.
    let assets = TrashAssets {
        mesh: meshes.add(Cylinder::new(1.1, 2.2)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.3, 0.16),
            perceptual_roughness: 0.9,
            ..default()
        }),
    };

    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Trash(Pooled)"),
                PooledTrash,
                TrashState::Inactive,
                Trash::default(),
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::from_translation(PARK_POSITION)
                    .with_scale(Vec3::splat(tunables.trash_scale)),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::sphere(PICK_RADIUS),
                inactive_trash_layers(),
                LinearVelocity(Vec3::ZERO),
            ))
            .id();

        pool.free.push(e);
    }

    info!("pre-spawned {cap} pooled trash entities");
    commands.insert_resource(assets);
}
