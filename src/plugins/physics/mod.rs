use avian3d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    // Everything floats on the water plane; motion is purely kinematic.
    app.insert_resource(Gravity(Vec3::ZERO));
}
