use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Scene;
use crate::canvas::{Canvas, Surface};
use crate::config::{PARTICLE_COUNT, TRAIL_FADE};
use crate::physics::particle::{Particle, scatter};
use crate::physics::Pointer;

/// Particles swarming along a heart curve, scattered by the pointer.
#[derive(Debug)]
pub struct HeartSwarm {
    surface: Surface,
    particles: Vec<Particle>,
    pointer: Pointer,
    rng: StdRng,
}

impl HeartSwarm {
    /// Deterministic swarm: the same `seed` scatters particles the same way.
    pub fn new(surface: Surface, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = scatter(&mut rng, surface, PARTICLE_COUNT);
        Self {
            surface,
            particles,
            pointer: Pointer::Absent,
            rng,
        }
    }

    pub fn with_entropy(surface: Surface) -> Self {
        Self::new(surface, rand::random())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Scene for HeartSwarm {
    fn surface(&self) -> Surface {
        self.surface
    }

    fn reset(&mut self, surface: Surface) {
        self.surface = surface;
        self.particles = scatter(&mut self.rng, surface, PARTICLE_COUNT);
    }

    fn update(&mut self) {
        let center = self.surface.center();
        for p in &mut self.particles {
            p.step(center, self.pointer);
        }
    }

    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        // Translucent wash instead of a clear leaves fading trails.
        canvas.set_fill(TRAIL_FADE);
        canvas.fill_rect(Vec2::ZERO, self.surface.size());
        for p in &self.particles {
            canvas.set_fill(p.color);
            canvas.fill_circle(p.position, p.radius);
        }
    }

    fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    fn pointer(&self) -> Pointer {
        self.pointer
    }
}
