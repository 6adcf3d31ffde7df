//! Camera plugin (render-only): orbit-follow around the boat.
//!
//! Right-drag orbits, scroll zooms, and the rig chases the boat with
//! exponential smoothing. Zoom is limited to 40..200 units and pitch is
//! capped just short of the horizon so the camera never dips underwater.
//!
//! Aliasing note: follow reads the boat Transform and writes the camera
//! Transform in one system, so the two queries carry `Without<...>` filters
//! to prove disjointness.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::boat::Boat;

const MIN_DISTANCE: f32 = 40.0;
const MAX_DISTANCE: f32 = 200.0;
const MIN_PITCH: f32 = 0.08;
// 0.495 * PI polar angle, measured from vertical -> ~0.016 PI above horizon.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

#[derive(Component)]
pub struct MainCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(Update, orbit_input.run_if(in_state(GameState::InGame)))
        .add_systems(
            PostUpdate,
            follow_boat
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        MainCamera {
            yaw: 0.0,
            pitch: 0.9,
            distance: 110.0,
            responsiveness: 5.0,
        },
        Transform::from_xyz(5.0, 100.0, 50.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn orbit_input(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut q_cam: Query<&mut MainCamera>,
) {
    let Ok(mut cam) = q_cam.single_mut() else {
        return;
    };

    if buttons.pressed(MouseButton::Right) {
        cam.yaw -= motion.delta.x * 0.005;
        cam.pitch = (cam.pitch + motion.delta.y * 0.005).clamp(MIN_PITCH, MAX_PITCH);
    }

    cam.distance = (cam.distance - scroll.delta.y * 8.0).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

fn follow_boat(
    time: Res<Time>,
    q_boat: Query<&Transform, (With<Boat>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Boat>>,
) {
    let Ok(boat_tf) = q_boat.single() else {
        return;
    };
    let Ok((mut cam_tf, cam)) = q_cam.single_mut() else {
        return;
    };

    let target = boat_tf.translation;
    let offset = Vec3::new(
        cam.pitch.cos() * cam.yaw.sin(),
        cam.pitch.sin(),
        cam.pitch.cos() * cam.yaw.cos(),
    ) * cam.distance;
    let desired = target + offset;

    let dt = time.delta_secs();
    let alpha = 1.0 - (-cam.responsiveness * dt).exp();

    cam_tf.translation = cam_tf.translation.lerp(desired, alpha);
    cam_tf.look_at(target, Vec3::Y);
}
