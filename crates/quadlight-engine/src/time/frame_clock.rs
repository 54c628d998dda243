use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Milliseconds since the clock was created. This is the tick timestamp
    /// shaders see (after conversion to seconds).
    pub timestamp_ms: f64,

    /// Time elapsed since the previous tick, in seconds, clamped.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The timestamp is never clamped; only `dt` is, so a debugger pause or a
/// minimized window does not produce a huge step for consumers of `dt`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock whose timestamp origin is now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock with an explicit origin.
    pub fn starting_at(origin: Instant) -> Self {
        Self {
            origin,
            last: origin,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            timestamp_ms: now.saturating_duration_since(self.origin).as_nanos() as f64 / 1_000_000.0,
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_milliseconds_since_origin() {
        let origin = Instant::now();
        let mut clock = FrameClock::starting_at(origin);

        let ft = clock.tick_at(origin + Duration::from_millis(2000));
        assert_eq!(ft.timestamp_ms, 2000.0);
        assert_eq!(ft.frame_index, 0);

        let ft = clock.tick_at(origin + Duration::from_millis(2016));
        assert_eq!(ft.timestamp_ms, 2016.0);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_but_timestamp_is_not() {
        let origin = Instant::now();
        let mut clock = FrameClock::starting_at(origin);

        let ft = clock.tick_at(origin + Duration::from_secs(10));
        assert_eq!(ft.dt, 0.25);
        assert_eq!(ft.timestamp_ms, 10_000.0);

        let ft = clock.tick_at(origin + Duration::from_secs(10));
        assert!((ft.dt - 0.0001).abs() < 1e-9);
    }
}
