use bevy::prelude::*;

use crate::common::test_utils::run_system_once;

#[test]
fn spawns_water_plane() {
    let mut world = World::new();
    world.init_resource::<Assets<Mesh>>();
    world.init_resource::<Assets<StandardMaterial>>();

    run_system_once(&mut world, super::spawn_water);

    let mut q = world.query::<(&Name, &Mesh3d, &Transform)>();
    let (name, _mesh, tf) = q.iter(&world).next().expect("water should exist");
    assert_eq!(name.as_str(), "Water");
    assert_eq!(tf.translation, Vec3::ZERO);
}
