//! Pointer pick: click a drifting trash to collect it.
//!
//! Cursor → world ray via the main camera, then a spatial-query raycast masked
//! to the Trash layer. Inactive pool members have no layer memberships, so the
//! ray can only ever land on active trash; the state gate below keeps a
//! double-click on an already-pending entity from counting twice.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;

use super::components::{PooledTrash, TrashState};

/// Flip a drifting trash to `PendingCollect`. Returns whether the hit counted.
#[inline]
pub fn try_collect(state: &mut TrashState) -> bool {
    if *state == TrashState::Drifting {
        *state = TrashState::PendingCollect;
        true
    } else {
        false
    }
}

pub fn pick_trash(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    tunables: Res<Tunables>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    spatial: SpatialQuery,
    mut q_state: Query<&mut TrashState, With<PooledTrash>>,
) {
    let Some(buttons) = buttons else { return };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_tf, cursor) else {
        return;
    };

    let filter = SpatialQueryFilter::from_mask(Layer::Trash);
    let Some(hit) = spatial.cast_ray(
        ray.origin,
        ray.direction,
        tunables.pick_max_distance,
        true,
        &filter,
    ) else {
        return;
    };

    if let Ok(mut state) = q_state.get_mut(hit.entity) {
        if try_collect(&mut state) {
            debug!("picked trash {:?} at distance {:.1}", hit.entity, hit.distance);
        }
    }
}
