use tracing::{debug, info};

use crate::canvas::{Canvas, Surface};
use crate::physics::Pointer;
use crate::scene::Scene;

/// Something that decides how many ticks are due each time the driver polls it.
pub trait TickSource {
    /// Ticks due since the previous call. Consumes them.
    fn due(&mut self) -> u32;
}

/// One tick per poll: the host polls once per display refresh.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTicks;

impl TickSource for FrameTicks {
    fn due(&mut self) -> u32 {
        1
    }
}

/// Ticks are queued by hand (tests, headless runs).
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualTicks {
    queued: u32,
}

impl ManualTicks {
    pub fn queue(&mut self, ticks: u32) {
        self.queued = self.queued.saturating_add(ticks);
    }
}

impl TickSource for ManualTicks {
    fn due(&mut self) -> u32 {
        std::mem::take(&mut self.queued)
    }
}

/// Owns a scene and runs update + render for every due tick while started.
#[derive(Debug)]
pub struct Driver<S, T> {
    scene: S,
    ticks: T,
    running: bool,
    frames: u64,
}

impl<S: Scene, T: TickSource> Driver<S, T> {
    /// The driver starts stopped; call [`Driver::start`] to begin pumping.
    pub fn new(scene: S, ticks: T) -> Self {
        let surface = scene.surface();
        info!(
            width = surface.width(),
            height = surface.height(),
            "surface initialized"
        );
        Self {
            scene,
            ticks,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            debug!(frames = self.frames, "driver started");
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!(frames = self.frames, "driver stopped");
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    /// Re-initialize the scene for a new surface.
    pub fn resize(&mut self, surface: Surface) {
        self.scene.reset(surface);
        info!(
            width = surface.width(),
            height = surface.height(),
            "surface initialized"
        );
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.scene.set_pointer(pointer);
    }

    /// Run every due tick (update, then render onto `canvas`). Ticks that come
    /// due while stopped are dropped. Returns the number of ticks run.
    pub fn pump<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> u32 {
        let due = self.ticks.due();
        if !self.running {
            return 0;
        }
        for _ in 0..due {
            self.scene.update();
            self.scene.render(canvas);
        }
        self.frames += u64::from(due);
        due
    }
}
