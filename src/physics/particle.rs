use bevy::prelude::*;
use rand::RngExt;
use std::f32::consts::TAU;

use super::heart::heart_target;
use super::pointer::Pointer;
use crate::canvas::Surface;
use crate::config::*;

/// One swarm particle chasing its own point along the heart curve.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Curve parameter (radians). Grows by `speed` every tick, never wrapped.
    pub t: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Point on the heart for the current `t`.
    pub target: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Per-tick velocity multiplier.
    pub damping: f32,
    pub attraction: f32,
    pub repel: f32,
    pub speed: f32,
}

impl Particle {
    /// Particle at rest at `position`, aimed at the curve point for `t`.
    pub fn new(t: f32, position: Vec2, center: Vec2) -> Self {
        Self {
            t,
            position,
            velocity: Vec2::ZERO,
            target: heart_target(t, center),
            radius: PARTICLE_RADIUS,
            color: PARTICLE_COLOR,
            damping: PARTICLE_DAMPING,
            attraction: PARTICLE_ATTRACTION,
            repel: PARTICLE_REPEL,
            speed: PARTICLE_SPEED,
        }
    }

    /// Velocity delta for this tick: away from a nearby pointer, otherwise
    /// toward the target.
    ///
    /// A pointer sitting exactly on the particle gives no direction to push
    /// along, so the impulse is zero for that tick.
    pub fn impulse(&self, pointer: Pointer) -> Vec2 {
        match pointer {
            Pointer::Present(at) if self.position.distance(at) < POINTER_RADIUS => {
                let away = self.position - at;
                let falloff = (POINTER_RADIUS - away.length()) / POINTER_RADIUS;
                away.normalize_or_zero() * falloff * self.repel
            }
            _ => (self.target - self.position) * self.attraction,
        }
    }

    /// Advance one tick on a surface centered at `center`.
    pub fn step(&mut self, center: Vec2, pointer: Pointer) {
        self.t += self.speed;
        self.target = heart_target(self.t, center);

        self.velocity += self.impulse(pointer);
        self.velocity *= self.damping;
        self.position += self.velocity;
    }
}

/// A fresh swarm of `count` particles: curve parameters spread evenly over one
/// turn, positions uniform over `surface`.
pub fn scatter<R: RngExt + ?Sized>(rng: &mut R, surface: Surface, count: usize) -> Vec<Particle> {
    let center = surface.center();
    (0..count)
        .map(|i| {
            let t = i as f32 * TAU / count as f32;
            let position = Vec2::new(
                rng.random_range(0.0..surface.width()),
                rng.random_range(0.0..surface.height()),
            );
            Particle::new(t, position, center)
        })
        .collect()
}
