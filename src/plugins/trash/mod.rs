//! Trash plugin: **message-based producer → consumer** spawning + data-driven pooling.
//!
//! The entire demo hangs off this per-frame lifecycle: place, drift, cull,
//! pick, replenish. Everything is pre-spawned into a fixed pool; activation and
//! recycling only mutate component values, never the archetype.
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt)
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  (A) Producer: replenish_trash                                           │
//! │      - reads: TrashPool occupancy, Tunables, boat Transform              │
//! │      - writes: SpawnTrashRequest messages (randomized placement)         │
//! │                                                                          │
//! │  (B) Consumer: activate_from_pool                                        │
//! │      - reads: SpawnTrashRequest messages                                 │
//! │      - mutates: TrashPool.free (Vec<Entity>)                             │
//! │      - mutates: TrashState, Trash, Transform, LinearVelocity,            │
//! │                 Visibility, CollisionLayers                              │
//! │                                                                          │
//! │  (C) Pointer pick: pick_trash                                            │
//! │      - reads: MouseButton input, cursor ray, SpatialQuery                │
//! │      - mutates: TrashState -> PendingCollect                             │
//! └──────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate / FixedPostUpdate (fixed dt)
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  (D) Avian integrates LinearVelocity (constant drift along world -Z)     │
//! │                                                                          │
//! │  (E) tick_drift ages active trash                                        │
//! │                                                                          │
//! │  (F) cull_strays: visibility/distance heuristic                          │
//! │      - mutates: TrashState -> PendingDespawn                             │
//! │                                                                          │
//! │  (G) Commit: recycle_trash                                               │
//! │      - consumes both pending states, owns the Inactive invariants        │
//! │      - PendingCollect additionally increments CleanupProgress            │
//! │      - mutates: TrashPool.free.push(entity)                              │
//! └──────────────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   recycle_trash pushes entities back into TrashPool.free
//!   activate_from_pool pops them for the next placement
//! ```
//!
//! Producers do **not** borrow `ResMut<TrashPool>`; they only enqueue intent.
//! The allocator is the single writer that mutates the pool, and the commit
//! system is the single writer of the Inactive invariants.
//!
//! Remaining branches are real-world input, not invariant checks:
//! - cursor/camera/window can be missing (headless, unfocused) → pick is a no-op
//! - pool can be empty → allocator drops the request (capacity decision)

pub mod components;
pub mod pool;

pub mod messages;
pub mod spawner;
pub mod allocator;

pub mod drift;
pub mod culling;
pub mod pickup;
pub mod commit;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub struct TrashPlugin;

/// Maintain spawn request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnTrashRequest>>) {
    msgs.update();
}

impl Plugin for TrashPlugin {
    fn build(&self, app: &mut App) {
        let tunables = app.world().resource::<Tunables>();
        let rng = match tunables.spawn_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let capacity = tunables.pool_capacity;
        let goal = tunables.cleanup_goal;

        // Pool + pre-spawn
        app.insert_resource(pool::TrashPool::new(capacity))
            .insert_resource(spawner::SpawnRng(rng))
            .insert_resource(components::CleanupProgress::new(goal))
            .add_systems(Startup, pool::init_trash_pool);

        // Message storage for spawn requests.
        app.init_resource::<Messages<messages::SpawnTrashRequest>>();
        app.add_systems(PostUpdate, update_spawn_messages);

        // Update-phase pipeline: replenish -> activate, plus pointer pick.
        app.add_systems(
            Update,
            (
                spawner::replenish_trash,
                allocator::activate_from_pool.after(spawner::replenish_trash),
                pickup::pick_trash,
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed pipeline: age, cull, recycle.
        app.add_systems(
            FixedUpdate,
            drift::tick_drift.run_if(in_state(GameState::InGame)),
        );
        app.add_systems(
            FixedPostUpdate,
            (
                culling::cull_strays,
                commit::recycle_trash.after(culling::cull_strays),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
