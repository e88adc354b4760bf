use bevy::prelude::*;

use canvas_toys::app::{CanvasPlugin, primary_window};
use canvas_toys::scene::HeartSwarm;

fn main() {
    App::new()
        // Trails fade toward this
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window("Heart swarm")),
            ..default()
        }))
        .add_plugins(CanvasPlugin::new(HeartSwarm::with_entropy).with_pointer_gizmo())
        .run();
}
