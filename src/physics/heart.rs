use bevy::prelude::*;

use crate::config::HEART_SCALE;

/// The classic heart curve in curve units, +Y up:
///
/// x = 16 sin³ t
/// y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t
#[inline]
pub fn heart_point(t: f32) -> Vec2 {
    let s = t.sin();
    Vec2::new(
        16.0 * s * s * s,
        13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos(),
    )
}

/// Surface-space (+Y down) point on the heart, scaled and centered on `center`.
#[inline]
pub fn heart_target(t: f32, center: Vec2) -> Vec2 {
    let p = heart_point(t) * HEART_SCALE;
    center + Vec2::new(p.x, -p.y)
}
