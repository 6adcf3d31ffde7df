//! Drift bookkeeping.
//!
//! The actual translation is Avian integrating the constant `LinearVelocity`
//! set at activation; this system only accumulates age, which the despawn
//! heuristic reads.

use bevy::prelude::*;
use bevy::time::Fixed;

use super::components::{PooledTrash, Trash, TrashState};

pub fn tick_drift(
    time: Res<Time<Fixed>>,
    mut q: Query<(&mut Trash, &TrashState), With<PooledTrash>>,
) {
    let dt = time.delta_secs();

    for (mut trash, state) in &mut q {
        if *state == TrashState::Drifting {
            trash.age_secs += dt;
        }
    }
}
