use bevy::prelude::*;

use super::systems::Stage;
use crate::config::POINTER_RADIUS;
use crate::scene::Scene;

/// Faint ring around the pointer showing where it repels.
pub fn draw_pointer_gizmo<S: Scene + Send + Sync + 'static>(
    mut gizmos: Gizmos,
    stage: Option<Res<Stage<S>>>,
) {
    let Some(stage) = stage else {
        return;
    };
    let scene = stage.driver.scene();
    let Some(at) = scene.pointer().position() else {
        return;
    };
    // Canvas space (top-left origin, +Y down) -> 2D world (centered, +Y up)
    let half = scene.surface().center();
    let world = Vec2::new(at.x - half.x, half.y - at.y);
    gizmos.circle_2d(world, POINTER_RADIUS, Color::srgba(1.0, 0.0, 0.0, 0.1));
}
