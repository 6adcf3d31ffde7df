//! Buffered spawn requests.
//!
//! The replenisher creates *intent*; the allocator applies it (pool pop +
//! component writes). Keeping the queue between them means only one system
//! ever mutates the pool.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnTrashRequest {
    /// World position of the new trash, already on the water line.
    pub pos: Vec3,
    /// Drift velocity to apply on activation.
    pub vel: Vec3,
}
