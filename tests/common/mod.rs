//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `AssetPlugin` + manual asset registration stand in for the render stack,
//!   so systems that build meshes/materials can run without a GPU.
//! - we then call `ocean_cleanup::game::configure_headless` to install
//!   gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    // Mesh/material storages normally registered by the render plugins.
    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();

    ocean_cleanup::game::configure_headless(&mut app);
    app
}
