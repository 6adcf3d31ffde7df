//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    // Horizon haze in lieu of a sky shader.
    app.insert_resource(ClearColor(Color::srgb(0.55, 0.71, 0.86)));
}

#[cfg(test)]
mod tests;
