use bevy::prelude::*;

/// Bouncing ball
pub const BALL_RADIUS: f32 = 30.0;
pub const BALL_GRAVITY: f32 = 1.0; // pixels per tick², +Y down
pub const BALL_BOUNCE: f32 = 0.9; // fraction of speed kept on each floor hit
/// Rebound speed below which the ball stops for good.
pub const BALL_REST_SPEED: f32 = 1.0;
pub const BALL_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

/// Heart swarm
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_RADIUS: f32 = 2.0;
pub const PARTICLE_DAMPING: f32 = 0.9;
pub const PARTICLE_ATTRACTION: f32 = 0.05;
pub const PARTICLE_REPEL: f32 = 5.0;
pub const PARTICLE_SPEED: f32 = 0.01; // curve radians per tick
pub const PARTICLE_COLOR: Color = Color::srgba(1.0, 0.3, 0.4, 0.8);

/// Heart curve units -> pixels
pub const HEART_SCALE: f32 = 10.0;

/// Pointer influence radius (pixels)
pub const POINTER_RADIUS: f32 = 100.0;

/// Painted over the whole surface every swarm frame instead of a clear.
pub const TRAIL_FADE: Color = Color::srgba(0.0, 0.0, 0.0, 0.1);
