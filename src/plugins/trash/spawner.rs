//! Producer: keep the drifting population at its target size.
//!
//! This system intentionally does **not** pop the pool; it measures the
//! deficit and enqueues placement requests, capped per frame so a mass
//! despawn never turns into a same-frame spawn burst.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::common::tunables::Tunables;
use crate::plugins::boat::Boat;

use super::messages::SpawnTrashRequest;
use super::pool::TrashPool;

/// Seeded placement RNG. A fixed `Tunables::spawn_seed` makes runs
/// reproducible end to end.
#[derive(Resource)]
pub struct SpawnRng(pub ChaCha8Rng);

/// Fallback anchor when no boat exists (headless tests): its start position.
const DEFAULT_ANCHOR: Vec3 = Vec3::new(5.0, 0.0, 50.0);

/// Pick a spawn point in one of the two weighted zones.
///
/// Near zone: x,z in ±near_extent, taken with `near_zone_weight` probability.
/// Far zone: x in ±far_x, z in ±far_z. Either way the point sits on the water
/// line at the configured float height.
///
/// Candidates inside the keep-out radius around `anchor` are resampled a few
/// times; after that the last candidate wins rather than looping forever.
pub fn spawn_point(rng: &mut ChaCha8Rng, tunables: &Tunables, anchor: Vec3) -> Vec3 {
    let keep_out_sq = tunables.spawn_keep_out * tunables.spawn_keep_out;
    let mut candidate = Vec3::ZERO;

    for _ in 0..4 {
        let (x, z) = if rng.gen_bool(tunables.near_zone_weight) {
            (
                rng.gen_range(-tunables.near_zone_extent..tunables.near_zone_extent),
                rng.gen_range(-tunables.near_zone_extent..tunables.near_zone_extent),
            )
        } else {
            (
                rng.gen_range(-tunables.far_zone_extent_x..tunables.far_zone_extent_x),
                rng.gen_range(-tunables.far_zone_extent_z..tunables.far_zone_extent_z),
            )
        };
        candidate = Vec3::new(x, tunables.trash_float_height, z);

        let offset = candidate - anchor;
        if Vec2::new(offset.x, offset.z).length_squared() > keep_out_sq {
            break;
        }
    }

    candidate
}

pub fn replenish_trash(
    pool: Res<TrashPool>,
    tunables: Res<Tunables>,
    mut rng: ResMut<SpawnRng>,
    q_boat: Query<&Transform, With<Boat>>,
    mut writer: MessageWriter<SpawnTrashRequest>,
) {
    let deficit = tunables.trash_target.saturating_sub(pool.in_flight());
    let batch = deficit.min(tunables.spawn_burst).min(pool.free.len());
    if batch == 0 {
        return;
    }

    let anchor = q_boat
        .single()
        .map(|tf| tf.translation)
        .unwrap_or(DEFAULT_ANCHOR);

    let vel = Vec3::NEG_Z * tunables.trash_drift_speed;

    for _ in 0..batch {
        let pos = spawn_point(&mut rng.0, &tunables, anchor);
        writer.write(SpawnTrashRequest { pos, vel });
    }

    debug!("requested {batch} trash spawns ({deficit} below target)");
}
