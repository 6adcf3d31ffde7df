//! Collision layers.
//!
//! Nothing in this scene physically collides; layers exist so spatial queries
//! (the pointer pick ray) can be masked to trash colliders only.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug)]
pub enum Layer {
    #[default]
    Default,
    Boat,
    Trash,
}
