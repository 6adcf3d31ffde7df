//! Despawn heuristic for strays.
//!
//! Two rules, both anchored on the boat:
//! - hard bound: anything farther than `max_range` goes, visible or not.
//! - view rule: off-screen trash that is receding from the boat, is beyond
//!   `despawn_distance`, and has been alive past the grace age goes.
//!
//! The receding check (velocity · offset > 0) is what keeps far-zone spawns
//! drifting *toward* the player alive while they are still off-screen.
//!
//! This system only marks `PendingDespawn`; the commit system owns recycling.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::boat::Boat;

use super::components::{PooledTrash, Trash, TrashState};

/// Pure form of the despawn rule. `offset` is trash position minus boat
/// position.
#[inline]
pub fn should_despawn(
    tunables: &Tunables,
    offset: Vec3,
    velocity: Vec3,
    in_view: bool,
    age_secs: f32,
) -> bool {
    let dist_sq = offset.length_squared();

    if dist_sq > tunables.max_range * tunables.max_range {
        return true;
    }

    !in_view
        && age_secs >= tunables.despawn_grace_secs
        && dist_sq > tunables.despawn_distance * tunables.despawn_distance
        && velocity.dot(offset) > 0.0
}

pub fn cull_strays(
    tunables: Res<Tunables>,
    q_boat: Query<&Transform, (With<Boat>, Without<PooledTrash>)>,
    mut q: Query<
        (
            &Transform,
            &LinearVelocity,
            &ViewVisibility,
            &Trash,
            &mut TrashState,
        ),
        With<PooledTrash>,
    >,
) {
    let Ok(boat_tf) = q_boat.single() else {
        return;
    };
    let boat_pos = boat_tf.translation;

    for (tf, vel, vis, trash, mut state) in &mut q {
        if *state != TrashState::Drifting {
            continue;
        }

        let offset = tf.translation - boat_pos;
        if should_despawn(&tunables, offset, vel.0, vis.get(), trash.age_secs) {
            *state = TrashState::PendingDespawn;
        }
    }
}
