//! Animation timing: fixed-rate tick accumulation and the frame clock.

/// Converts variable frame deltas into whole logic ticks at a fixed rate.
/// Keeps animation timing deterministic regardless of display frame rate.
pub struct TickAccumulator {
    /// Seconds per logic tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl TickAccumulator {
    pub fn new(tick_rate: f32) -> Self {
        Self {
            dt: 1.0 / tick_rate,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of whole ticks
    /// to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap so a long stall cannot unleash a burst of ticks (max 10)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let ticks = (self.accumulator / self.dt) as u32;
        self.accumulator -= ticks as f32 * self.dt;
        ticks
    }

    /// Seconds per logic tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Advances the displayed animation row over wall-clock time at a
/// configurable duration per frame, independent of rendering frame rate.
///
/// The elapsed-tick accumulator is frozen while playback is paused, so a
/// long pause never fast-forwards several frames on resume.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    tick_rate: f32,
    elapsed_ticks: u32,
    frame_index: u32,
    seconds_per_frame: f32,
    rotation_degrees: f32,
    rotation_speed: f32,
}

impl AnimationClock {
    pub fn new(tick_rate: f32, rotation_speed: f32) -> Self {
        Self {
            tick_rate,
            elapsed_ticks: 0,
            frame_index: 0,
            seconds_per_frame: 1.0,
            rotation_degrees: 0.0,
            rotation_speed,
        }
    }

    /// One logic tick. Returns true when the frame index advanced.
    pub fn step(&mut self, playing: bool, v_frames: u32) -> bool {
        if !playing {
            return false;
        }
        self.elapsed_ticks += 1;
        if (self.elapsed_ticks as f32) / (self.tick_rate * self.seconds_per_frame) < 1.0 {
            return false;
        }
        self.frame_index = if self.frame_index + 1 < v_frames {
            self.frame_index + 1
        } else {
            0
        };
        self.elapsed_ticks = 0;
        true
    }

    /// Wall-clock rotation accumulation. Runs whenever rotation is enabled,
    /// unaffected by play/pause. Never wrapped explicitly; hosts treat the
    /// angle modulo 360.
    pub fn rotate(&mut self, dt: f32, enabled: bool) {
        if enabled {
            self.rotation_degrees += dt * self.rotation_speed;
        }
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn seconds_per_frame(&self) -> f32 {
        self.seconds_per_frame
    }

    /// Select a frame directly (UI spinner). Clamped into `[0, v_frames)`.
    pub fn set_frame(&mut self, frame: i32, v_frames: u32) {
        self.frame_index = (frame.max(0) as u32).min(v_frames.saturating_sub(1));
        self.elapsed_ticks = 0;
    }

    /// Re-clamp after the frame count shrinks.
    pub fn clamp_frame(&mut self, v_frames: u32) {
        if self.frame_index >= v_frames {
            self.frame_index = 0;
        }
    }

    /// Reset for a freshly dropped sheet.
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
        self.frame_index = 0;
        self.rotation_degrees = 0.0;
    }

    /// Set the duration of one animation frame. Any positive value is
    /// accepted; non-positive values are ignored.
    pub fn set_seconds_per_frame(&mut self, seconds: f32) {
        if seconds > 0.0 {
            self.seconds_per_frame = seconds;
        } else {
            log::warn!("ignoring non-positive frame duration: {}", seconds);
        }
    }
}
