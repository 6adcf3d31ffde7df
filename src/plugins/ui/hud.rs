//! Cleanup progress HUD: a label plus a bar that fills as trash is collected.
//!
//! Plain UI components, no assets; works headless, renders when the full app
//! has the UI pipeline.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::trash::components::CleanupProgress;

const BAR_WIDTH: f32 = 320.0;
const BAR_HEIGHT: f32 = 16.0;

#[derive(Component)]
struct ProgressFill;

#[derive(Component)]
struct ProgressLabel;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud).add_systems(
        Update,
        update_hud
            .run_if(in_state(GameState::InGame))
            .run_if(resource_changed::<CleanupProgress>),
    );
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("CleanupHud"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                bottom: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            parent.spawn((
                ProgressLabel,
                Text::new("Cleaned 0 / 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            // Track, with the fill as its only child.
            parent
                .spawn((
                    Node {
                        width: Val::Px(BAR_WIDTH),
                        height: Val::Px(BAR_HEIGHT),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
                ))
                .with_children(|track| {
                    track.spawn((
                        ProgressFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.2, 0.8, 0.4)),
                    ));
                });
        });
}

fn update_hud(
    progress: Res<CleanupProgress>,
    mut q_fill: Query<&mut Node, With<ProgressFill>>,
    mut q_label: Query<&mut Text, With<ProgressLabel>>,
) {
    if let Ok(mut node) = q_fill.single_mut() {
        node.width = Val::Percent(progress.fraction() * 100.0);
    }
    if let Ok(mut text) = q_label.single_mut() {
        text.0 = format!("Cleaned {} / {}", progress.collected, progress.goal);
    }
}

#[cfg(test)]
mod tests;
