//! Recycle commit: return pending trash to the pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive trash must be:
//! - hidden
//! - velocity = 0
//! - invisible to spatial queries (no layer memberships)
//! - parked outside the play area
//!
//! Centralizing these writes here prevents inconsistencies, and makes the
//! score increment atomic with the recycle: a collected trash counts exactly
//! once.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{CleanupProgress, PooledTrash, TrashState};
use super::pool::{PARK_POSITION, TrashPool, inactive_trash_layers};

pub fn recycle_trash(
    mut pool: ResMut<TrashPool>,
    mut progress: ResMut<CleanupProgress>,
    mut q: Query<
        (
            Entity,
            &mut TrashState,
            &mut Visibility,
            &mut LinearVelocity,
            &mut Transform,
            &mut CollisionLayers,
        ),
        With<PooledTrash>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut tf, mut layers) in &mut q {
        match *state {
            TrashState::PendingCollect => progress.record_collected(),
            TrashState::PendingDespawn => {}
            _ => continue,
        }

        *state = TrashState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec3::ZERO;
        tf.translation = PARK_POSITION;
        *layers = inactive_trash_layers();

        pool.free.push(e);
    }
}
