//! Water plugin: spawns the ocean surface.
//!
//! A single large plane with a deep sea-green material. Animated normal maps
//! and sun-driven uniforms would live in a custom material, not here.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

const WATER_EXTENT: f32 = 10_000.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_water);
}

fn spawn_water(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Water"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(WATER_EXTENT, WATER_EXTENT))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x00, 0x1e, 0x0f),
            perceptual_roughness: 0.15,
            metallic: 0.6,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        DespawnOnExit(GameState::InGame),
    ));
}

#[cfg(test)]
mod tests;
