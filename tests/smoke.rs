mod common;

use ocean_cleanup::common::tunables::Tunables;
use ocean_cleanup::plugins::trash::components::{PooledTrash, TrashState};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn pool_is_prespawned_to_capacity() {
    let mut app = common::app_headless();
    app.update();

    let capacity = app.world().resource::<Tunables>().pool_capacity;
    let pooled = app
        .world_mut()
        .query::<&PooledTrash>()
        .iter(app.world())
        .count();
    assert_eq!(pooled, capacity);
}

#[test]
fn population_fills_to_target_and_stops() {
    let mut app = common::app_headless();

    // The replenisher is burst-capped per frame; give it a few frames.
    for _ in 0..12 {
        app.update();
    }

    let target = app.world().resource::<Tunables>().trash_target;
    let drifting = app
        .world_mut()
        .query::<&TrashState>()
        .iter(app.world())
        .filter(|s| **s == TrashState::Drifting)
        .count();
    assert_eq!(drifting, target);
}
