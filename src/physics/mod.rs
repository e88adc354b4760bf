pub mod ball;
pub mod heart;
pub mod particle;
pub mod pointer;

pub use ball::{Ball, Motion, Step};
pub use heart::{heart_point, heart_target};
pub use particle::Particle;
pub use pointer::Pointer;
