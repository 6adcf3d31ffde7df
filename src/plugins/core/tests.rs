use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn default_tunables_are_internally_consistent() {
    let t = Tunables::default();
    assert!(t.pool_capacity >= t.trash_target);
    assert!(t.max_range > t.despawn_distance);
    assert!(t.far_zone_extent_x >= t.near_zone_extent);
    assert!(t.far_zone_extent_z >= t.near_zone_extent);
    assert!((0.0..=1.0).contains(&t.near_zone_weight));
}
