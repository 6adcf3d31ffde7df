//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Forward speed of the boat, world units per second.
    pub boat_speed: f32,
    /// Yaw rate of the boat, radians per second.
    pub boat_turn_rate: f32,

    /// Steady-state number of drifting trash entities.
    pub trash_target: usize,
    /// Pre-spawned pool size. Must be >= `trash_target` plus headroom for
    /// entities awaiting recycle.
    pub pool_capacity: usize,
    /// Maximum spawn requests written per frame.
    pub spawn_burst: usize,

    /// Probability that a spawn lands in the near zone.
    pub near_zone_weight: f64,
    /// Near zone half-extent on both X and Z.
    pub near_zone_extent: f32,
    /// Far zone half-extent on X.
    pub far_zone_extent_x: f32,
    /// Far zone half-extent on Z.
    pub far_zone_extent_z: f32,
    /// No trash may spawn within this XZ radius of the boat.
    pub spawn_keep_out: f32,

    /// Water-line Y offset of a floating trash entity.
    pub trash_float_height: f32,
    /// Uniform scale applied to activated trash.
    pub trash_scale: f32,
    /// Drift speed along world -Z, world units per second.
    pub trash_drift_speed: f32,

    /// Off-screen trash farther than this from the boat is eligible for despawn.
    pub despawn_distance: f32,
    /// Trash farther than this from the boat is despawned unconditionally.
    pub max_range: f32,
    /// Minimum age before the visibility-based despawn rule applies.
    /// Far-zone spawns start off-screen; without this they would be culled on arrival.
    pub despawn_grace_secs: f32,

    /// Maximum pick-ray length.
    pub pick_max_distance: f32,
    /// Collected trash needed to fill the progress bar.
    pub cleanup_goal: u32,

    /// Fixed RNG seed for spawn placement; `None` seeds from OS entropy.
    pub spawn_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            boat_speed: 18.0,
            boat_turn_rate: 0.9,

            trash_target: 200,
            pool_capacity: 256,
            spawn_burst: 32,

            near_zone_weight: 0.4,
            near_zone_extent: 100.0,
            far_zone_extent_x: 500.0,
            far_zone_extent_z: 1000.0,
            spawn_keep_out: 25.0,

            trash_float_height: -0.5,
            trash_scale: 1.5,
            trash_drift_speed: 12.0,

            despawn_distance: 250.0,
            max_range: 1200.0,
            despawn_grace_secs: 4.0,

            pick_max_distance: 2000.0,
            cleanup_goal: 50,

            spawn_seed: None,
        }
    }
}
