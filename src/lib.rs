//! Two small 2D canvas toys: a bouncing ball and a particle swarm that
//! follows a heart curve and scatters away from the pointer.
//!
//! The simulations ([`physics`], [`scene`]) and the frame [`driver`] are plain
//! Rust and run headless; [`app`] hosts a scene in a Bevy window.

pub mod app;
pub mod canvas;
pub mod config;
pub mod driver;
pub mod physics;
pub mod scene;
