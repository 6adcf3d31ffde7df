//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::trash::TrashPlugin;

pub mod boat;
pub mod core;
pub mod physics;
pub mod trash;
pub mod ui;
pub mod water;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    water::plugin(app);
    boat::plugin(app);
    ui::hud::plugin(app);
    app.add_plugins(TrashPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
