use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate; the simulation advances one generation per frame,
/// so the cap doubles as the generation rate.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.1,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    pub fn sleep(&mut self, max_fps: f64) {
        let target_frametime = Duration::from_secs_f64(1.0 / max_fps);
        let before_wait = self.frame_timer.elapsed();

        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
