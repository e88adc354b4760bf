use tracing::debug;

use super::Scene;
use crate::canvas::{Canvas, Surface};
use crate::physics::{Ball, Step};

/// A single ball dropped from the middle of the surface.
#[derive(Clone, Debug)]
pub struct BouncingBall {
    surface: Surface,
    ball: Ball,
}

impl BouncingBall {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            ball: Ball::new(surface.center()),
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }
}

impl Scene for BouncingBall {
    fn surface(&self) -> Surface {
        self.surface
    }

    fn reset(&mut self, surface: Surface) {
        self.surface = surface;
        self.ball.drop_from(surface.center());
    }

    fn update(&mut self) {
        if self.ball.step(self.surface.height()) == Step::Settled {
            debug!(y = self.ball.position.y, "ball came to rest");
        }
    }

    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();
        canvas.set_fill(self.ball.color);
        canvas.fill_circle(self.ball.position, self.ball.radius);
    }
}
