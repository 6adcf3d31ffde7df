use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn spawn_creates_boat() {
    let mut world = World::new();
    world.init_resource::<Assets<Mesh>>();
    world.init_resource::<Assets<StandardMaterial>>();

    run_system_once(&mut world, super::spawn);

    let mut q = world.query::<(&super::Boat, &Transform, &RigidBody)>();
    let (_boat, tf, rb) = q.iter(&world).next().expect("boat should exist");
    assert_eq!(tf.translation, Vec3::new(5.0, 0.0, 50.0));
    assert!(matches!(rb, RigidBody::Kinematic));
}

#[test]
fn apply_movement_sets_forward_and_yaw_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        boat_speed: 10.0,
        boat_turn_rate: 2.0,
        ..default()
    });
    world.insert_resource(super::BoatInput {
        thrust: 1.0,
        steer: 0.5,
    });
    // Identity rotation: forward is world -Z.
    world.spawn((
        super::Boat,
        Transform::IDENTITY,
        LinearVelocity::ZERO,
        AngularVelocity::default(),
    ));

    run_system_once(&mut world, super::apply_movement);

    let mut q = world.query::<(&LinearVelocity, &AngularVelocity)>();
    let (vel, ang) = q.iter(&world).next().unwrap();
    assert_eq!(vel.0, Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(ang.0, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn apply_movement_keeps_the_boat_on_the_water_plane() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(super::BoatInput {
        thrust: 1.0,
        steer: 0.0,
    });
    // Pitched nose-down; the Y component must still be stripped.
    world.spawn((
        super::Boat,
        Transform::from_rotation(Quat::from_rotation_x(0.4)),
        LinearVelocity::ZERO,
        AngularVelocity::default(),
    ));

    run_system_once(&mut world, super::apply_movement);

    let mut q = world.query::<&LinearVelocity>();
    let vel = q.iter(&world).next().unwrap();
    assert_eq!(vel.0.y, 0.0);
    assert!(vel.0.length() > 0.0);
}
