use crate::canvas::{Canvas, Surface};
use crate::physics::Pointer;

pub mod ball;
pub mod swarm;

pub use ball::BouncingBall;
pub use swarm::HeartSwarm;

/// One self-contained animation: owns its state, advances one tick at a time
/// and paints itself.
pub trait Scene {
    /// Surface the scene was last sized for.
    fn surface(&self) -> Surface;

    /// (Re)initialize for `surface`. Runs at startup and on every resize.
    fn reset(&mut self, surface: Surface);

    /// Advance the simulation by one tick.
    fn update(&mut self);

    /// Paint the current state.
    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C);

    /// Scenes that don't react to the pointer keep the defaults.
    fn set_pointer(&mut self, _pointer: Pointer) {}

    fn pointer(&self) -> Pointer {
        Pointer::Absent
    }
}
