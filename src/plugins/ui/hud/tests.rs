use bevy::prelude::*;

use super::{ProgressFill, ProgressLabel, spawn_hud, update_hud};
use crate::common::test_utils::run_system_once;
use crate::plugins::trash::components::CleanupProgress;

#[test]
fn spawn_hud_builds_label_and_bar() {
    let mut world = World::new();
    run_system_once(&mut world, spawn_hud);

    assert_eq!(world.query::<&ProgressFill>().iter(&world).count(), 1);
    assert_eq!(world.query::<&ProgressLabel>().iter(&world).count(), 1);
}

#[test]
fn update_hud_reflects_progress() {
    let mut world = World::new();
    run_system_once(&mut world, spawn_hud);

    let mut progress = CleanupProgress::new(50);
    for _ in 0..25 {
        progress.record_collected();
    }
    world.insert_resource(progress);

    run_system_once(&mut world, update_hud);

    let mut q_fill = world.query::<(&Node, &ProgressFill)>();
    let (node, _) = q_fill.iter(&world).next().unwrap();
    assert_eq!(node.width, Val::Percent(50.0));

    let mut q_label = world.query::<(&Text, &ProgressLabel)>();
    let (text, _) = q_label.iter(&world).next().unwrap();
    assert_eq!(text.0, "Cleaned 25 / 50");
}
