//! End-to-end trash lifecycle against the real schedules:
//! activate → collect/cull (FixedPostUpdate) → recycle → replenish.

mod common;

use bevy::prelude::*;

use ocean_cleanup::common::tunables::Tunables;
use ocean_cleanup::plugins::trash::components::{CleanupProgress, PooledTrash, TrashState};
use ocean_cleanup::plugins::trash::pool::TrashPool;

/// Any currently drifting trash entity.
fn a_drifting_trash(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<(Entity, &TrashState), With<PooledTrash>>()
        .iter(app.world())
        .find(|(_, s)| **s == TrashState::Drifting)
        .map(|(e, _)| e)
        .expect("population should contain drifting trash")
}

fn drifting_count(app: &mut App) -> usize {
    app.world_mut()
        .query::<&TrashState>()
        .iter(app.world())
        .filter(|s| **s == TrashState::Drifting)
        .count()
}

#[test]
fn collected_trash_scores_recycles_and_is_replenished() {
    let mut app = common::app_headless();
    for _ in 0..12 {
        app.update();
    }
    let target = app.world().resource::<Tunables>().trash_target;
    assert_eq!(drifting_count(&mut app), target);

    // Pointer pick marks the hit entity; the commit owns everything after.
    let picked = a_drifting_trash(&mut app);
    *app.world_mut().get_mut::<TrashState>(picked).unwrap() = TrashState::PendingCollect;

    app.world_mut().run_schedule(FixedPostUpdate);

    assert_eq!(app.world().resource::<CleanupProgress>().collected, 1);
    assert_eq!(
        *app.world().get::<TrashState>(picked).unwrap(),
        TrashState::Inactive
    );
    assert_eq!(
        *app.world().get::<Visibility>(picked).unwrap(),
        Visibility::Hidden
    );
    assert!(!app.world().resource::<TrashPool>().free.is_empty());

    // The replenisher notices the hole and fills it on the next frame.
    app.update();
    assert_eq!(drifting_count(&mut app), target);
}

#[test]
fn out_of_range_trash_is_culled_without_scoring() {
    let mut app = common::app_headless();
    for _ in 0..12 {
        app.update();
    }

    let stray = a_drifting_trash(&mut app);
    let max_range = app.world().resource::<Tunables>().max_range;

    // Teleport far past the hard bound, relative to the boat's start position.
    app.world_mut()
        .get_mut::<Transform>(stray)
        .unwrap()
        .translation = Vec3::new(5.0, -0.5, 50.0 + max_range + 100.0);

    // Culling marks and the commit recycles within the same fixed pass.
    app.world_mut().run_schedule(FixedPostUpdate);

    assert_eq!(
        *app.world().get::<TrashState>(stray).unwrap(),
        TrashState::Inactive
    );
    assert_eq!(app.world().resource::<CleanupProgress>().collected, 0);
}
