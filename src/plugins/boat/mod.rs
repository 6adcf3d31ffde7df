//! Boat plugin.
//!
//! Pipeline:
//! - Update: sample input, write BoatInput resource
//! - FixedUpdate: apply yaw + forward velocity to the kinematic rigid body
//!
//! The hull is an asset-free primitive; a textured model can replace it
//! without touching the input or movement systems.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

#[derive(Component)]
pub struct Boat;

#[derive(Resource, Default, Debug)]
struct BoatInput {
    /// Forward thrust in [-1, 1].
    thrust: f32,
    /// Steering in [-1, 1]; positive turns left.
    steer: f32,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(BoatInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hull = meshes.add(Cuboid::new(3.0, 1.6, 8.0));
    let paint = materials.add(StandardMaterial {
        base_color: Color::srgb(0.82, 0.33, 0.18),
        perceptual_roughness: 0.6,
        ..default()
    });

    commands.spawn((
        Name::new("Boat"),
        Boat,
        Mesh3d(hull),
        MeshMaterial3d(paint),
        Transform::from_xyz(5.0, 0.0, 50.0).with_rotation(Quat::from_rotation_y(0.5)),
        RigidBody::Kinematic,
        Collider::cuboid(3.0, 1.6, 8.0),
        CollisionLayers::new(Layer::Boat, [] as [Layer; 0]),
        LinearVelocity::ZERO,
        AngularVelocity::default(),
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<BoatInput>) {
    let mut thrust = 0.0;
    let mut steer = 0.0;

    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        thrust += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        thrust -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        steer += 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        steer -= 1.0;
    }

    input.thrust = thrust;
    input.steer = steer;
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<BoatInput>,
    mut q_boat: Query<(&Transform, &mut LinearVelocity, &mut AngularVelocity), With<Boat>>,
) {
    let Ok((tf, mut vel, mut ang)) = q_boat.single_mut() else {
        return;
    };

    // Forward is local -Z. The boat never leaves the water plane.
    let mut forward = tf.rotation * Vec3::NEG_Z;
    forward.y = 0.0;
    forward = forward.normalize_or_zero();

    vel.0 = forward * input.thrust * tunables.boat_speed;
    ang.0 = Vec3::Y * input.steer * tunables.boat_turn_rate;
}

#[cfg(test)]
mod tests;
