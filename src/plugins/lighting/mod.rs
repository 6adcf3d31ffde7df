//! Lighting plugin (render-only): ambient fill plus a low sun.
//!
//! The sun sits just above the horizon (elevation 2 degrees, azimuth 170
//! degrees) for a late-afternoon look over the water.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

const SUN_ELEVATION_DEG: f32 = 2.0;
const SUN_AZIMUTH_DEG: f32 = 170.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), setup);
}

/// Unit vector pointing from the origin toward the sun.
fn sun_direction() -> Vec3 {
    let phi = (90.0 - SUN_ELEVATION_DEG).to_radians();
    let theta = SUN_AZIMUTH_DEG.to_radians();

    Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos())
}

fn setup(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: 120.0,
        ..GlobalAmbientLight::default()
    });

    let sun = sun_direction();
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            color: Color::srgb(1.0, 0.87, 0.7),
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(sun * 500.0).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}
