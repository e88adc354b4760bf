use bevy::prelude::*;

use canvas_toys::app::{CanvasPlugin, primary_window};
use canvas_toys::scene::BouncingBall;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window("Bouncing ball")),
            ..default()
        }))
        .add_plugins(CanvasPlugin::new(BouncingBall::new))
        .run();
}
