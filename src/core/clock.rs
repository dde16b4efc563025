//! Fixed-step frame pacing.
//!
//! Wall-clock time is accumulated and paid out in whole `FRAME_MS` frames.
//! Long stalls (terminal suspended, debugger) are clamped so the game does
//! not fast-forward through dozens of frames at once.

use super::constants::{FRAME_MS, MAX_FRAME_CATCHUP_MS};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulated_ms: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt_ms` of elapsed time and return how many frames are now due.
    pub fn accumulate(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_CATCHUP_MS);
        let due = self.accumulated_ms / FRAME_MS;
        self.accumulated_ms %= FRAME_MS;
        due as u32
    }

    /// How long to wait for input before the next frame is due, given the
    /// time already spent since the last `accumulate`.
    pub fn until_next_frame(&self, since_last_ms: u64) -> Duration {
        let pending = self.accumulated_ms + since_last_ms;
        Duration::from_millis(FRAME_MS.saturating_sub(pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::FPS;

    #[test]
    fn test_whole_frames_are_paid_out() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.accumulate(10), 0);
        assert_eq!(clock.accumulate(10), 1);
        assert_eq!(clock.accumulate(12), 1);
        assert_eq!(clock.accumulate(32), 2);
    }

    #[test]
    fn test_frame_length_follows_fps() {
        assert_eq!(FRAME_MS, 16);
        assert_eq!(FRAME_MS, 1000 / FPS as u64);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let due = clock.accumulate(5_000);
        assert_eq!(due as u64, MAX_FRAME_CATCHUP_MS / FRAME_MS);
    }

    #[test]
    fn test_until_next_frame() {
        let mut clock = FrameClock::new();
        clock.accumulate(10);
        assert_eq!(clock.until_next_frame(0), Duration::from_millis(6));
        assert_eq!(clock.until_next_frame(4), Duration::from_millis(2));
        assert_eq!(clock.until_next_frame(50), Duration::ZERO);
    }
}
