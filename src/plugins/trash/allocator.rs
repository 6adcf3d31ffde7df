//! Spawn consumer: activate trash from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list contains only valid pooled trash entities.
//! - Therefore, a popped entity must match the pooled trash query.
//!
//! If that is violated we `expect()` and crash loudly; it means the pool was
//! corrupted, not that a request was unlucky.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{PooledTrash, Trash, TrashState};
use super::messages::SpawnTrashRequest;
use super::pool::{TrashPool, active_trash_layers};

pub fn activate_from_pool(
    mut pool: ResMut<TrashPool>,
    mut reader: MessageReader<SpawnTrashRequest>,
    mut q: Query<
        (
            &mut TrashState,
            &mut Trash,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledTrash>,
    >,
) {
    for req in reader.read() {
        let Some(e) = pool.free.pop() else {
            // Capacity decision, not a correctness failure.
            continue;
        };

        let (mut state, mut trash, mut tf, mut vel, mut vis, mut layers) = q
            .get_mut(e)
            .expect("TrashPool contained an entity missing pooled trash components");

        *state = TrashState::Drifting;
        trash.reset_for_spawn();
        tf.translation = req.pos;
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_trash_layers();
    }
}
