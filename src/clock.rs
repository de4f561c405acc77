use crate::constants::MAX_FRAME_DT;
use instant::Instant;

/// Frame delta fed to the scene: never negative, never longer than `MAX_FRAME_DT`.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, clamped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        clamp_frame_dt(dt.as_secs_f32())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
