//! Headless run: drive a scene for a fixed number of ticks into an in-memory
//! canvas and report how long it took.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::{Parser, ValueEnum};

use canvas_toys::canvas::{PixelCanvas, Surface};
use canvas_toys::driver::{Driver, ManualTicks};
use canvas_toys::scene::{BouncingBall, HeartSwarm, Scene};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneKind {
    Ball,
    Swarm,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, value_enum, default_value_t = SceneKind::Swarm)]
    scene: SceneKind,
    #[arg(long, default_value_t = 10_000)]
    ticks: u32,
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 720.0)]
    height: f32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn run<S: Scene>(scene: S, ticks: u32) -> Duration {
    let mut canvas = PixelCanvas::for_surface(scene.surface());
    let mut driver = Driver::new(scene, ManualTicks::default());
    driver.start();
    driver.ticks_mut().queue(ticks);

    let start = Instant::now();
    driver.pump(&mut canvas);
    start.elapsed()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Only for its tracing subscriber; nothing else runs in this App.
    App::new().add_plugins(LogPlugin::default());

    let surface = Surface::new(args.width, args.height)
        .with_context(|| format!("unusable surface {}x{}", args.width, args.height))?;

    let elapsed = match args.scene {
        SceneKind::Ball => run(BouncingBall::new(surface), args.ticks),
        SceneKind::Swarm => run(HeartSwarm::new(surface, args.seed), args.ticks),
    };

    let per_tick = elapsed / args.ticks.max(1);
    info!(
        scene = ?args.scene,
        ticks = args.ticks,
        total_ms = elapsed.as_secs_f64() * 1e3,
        per_tick_us = per_tick.as_secs_f64() * 1e6,
        "benchmark finished"
    );
    Ok(())
}
