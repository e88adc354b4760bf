use bevy::prelude::*;

use crate::config::*;

/// Ball lifecycle: gravity acts while `Falling`; a weak enough bounce switches
/// gravity off for good.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Falling,
    Resting,
}

/// What a single integration step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved without touching the floor.
    Fell,
    /// Hit the floor and rebounded.
    Bounced,
    /// Hit the floor too softly to rebound; now resting.
    Settled,
    /// Already resting, nothing changed.
    Idle,
}

/// A ball that only moves vertically, in surface space (+Y down).
#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub position: Vec2,
    pub radius: f32,
    pub velocity_y: f32,
    pub gravity: f32,
    /// Fraction of speed kept after a floor hit (0..=1).
    pub bounce: f32,
    pub color: Color,
    pub motion: Motion,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            radius: BALL_RADIUS,
            velocity_y: 0.0,
            gravity: BALL_GRAVITY,
            bounce: BALL_BOUNCE,
            color: BALL_COLOR,
            motion: Motion::Falling,
        }
    }
}

impl Ball {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Put the ball at `position` with zero velocity and gravity switched back on.
    pub fn drop_from(&mut self, position: Vec2) {
        self.position = position;
        self.velocity_y = 0.0;
        self.gravity = BALL_GRAVITY;
        self.motion = Motion::Falling;
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.radius
    }

    /// Advance one tick against a floor at `floor` (the surface height).
    ///
    /// v += g; y += v; on contact clamp onto the floor and reflect with
    /// `bounce`. A rebound slower than [`BALL_REST_SPEED`] stops the ball.
    pub fn step(&mut self, floor: f32) -> Step {
        if self.motion == Motion::Resting {
            return Step::Idle;
        }

        self.velocity_y += self.gravity;
        self.position.y += self.velocity_y;

        if self.bottom() <= floor {
            return Step::Fell;
        }

        self.position.y = floor - self.radius;
        self.velocity_y = -self.velocity_y * self.bounce;

        if self.velocity_y.abs() < BALL_REST_SPEED {
            self.velocity_y = 0.0;
            self.gravity = 0.0;
            self.motion = Motion::Resting;
            Step::Settled
        } else {
            Step::Bounced
        }
    }
}
