use bevy::prelude::*;

pub mod debug;
pub mod systems;

use crate::canvas::Surface;
use crate::scene::Scene;
use systems::{
    SceneFactory, advance, exit_on_esc_or_q_if_native, spawn_canvas, sync_pointer, sync_surface,
    upload_canvas,
};

/// Hosts one [`Scene`] in the primary window.
/// Plug this into your App with `.add_plugins(CanvasPlugin::new(MyScene::new))`.
pub struct CanvasPlugin<S> {
    build_scene: fn(Surface) -> S,
    pointer_gizmo: bool,
}

impl<S> CanvasPlugin<S> {
    pub fn new(build_scene: fn(Surface) -> S) -> Self {
        Self {
            build_scene,
            pointer_gizmo: false,
        }
    }

    /// Outline the pointer's influence radius.
    pub fn with_pointer_gizmo(mut self) -> Self {
        self.pointer_gizmo = true;
        self
    }
}

impl<S: Scene + Send + Sync + 'static> Plugin for CanvasPlugin<S> {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneFactory(self.build_scene))
            // Camera, canvas sprite and the driver (needs the window size)
            .add_systems(Startup, spawn_canvas::<S>)
            // Window input first, then exactly one tick, then hand pixels to the GPU
            .add_systems(
                Update,
                (
                    sync_surface::<S>,
                    sync_pointer::<S>,
                    advance::<S>,
                    upload_canvas::<S>,
                )
                    .chain(),
            )
            .add_systems(Update, exit_on_esc_or_q_if_native);

        if self.pointer_gizmo {
            app.add_systems(Update, debug::draw_pointer_gizmo::<S>);
        }
    }
}

/// Primary window that fills the viewport (the page, on the web).
pub fn primary_window(title: &str) -> Window {
    Window {
        title: title.to_string(),
        fit_canvas_to_parent: true,
        ..default()
    }
}
