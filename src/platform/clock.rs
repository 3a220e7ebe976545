//! Frame clock for `requestAnimationFrame`-style drivers

use crate::consts::MAX_FRAME_DT;

/// Turns monotonic frame timestamps (ms) into clamped simulation steps
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous frame, in `[0, max_dt]`.
    ///
    /// The first frame (and the first after [`FrameClock::reset`]) yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }

    /// Forget the previous timestamp (e.g. after the tab was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(0.0);
        assert_eq!(clock.tick(2000.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::default();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::default();
        clock.tick(0.0);
        clock.reset();
        assert_eq!(clock.tick(5000.0), 0.0);
        assert!(clock.tick(5010.0) > 0.0);
    }
}
