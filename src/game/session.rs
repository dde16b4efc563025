//! Score and scroll speed for a single run.

use crate::core::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub score: u32,
    pub speed: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            score: 0,
            speed: INITIAL_SPEED,
        }
    }

    /// Count one obstacle pass-through and apply the speed ramp.
    /// Returns true if the speed went up.
    ///
    /// The ramp fires on every pass that leaves the score on a multiple of
    /// `SPEED_INCREASE_RATE`; since the score moves by exactly one per pass
    /// this is once per multiple crossed.
    pub fn record_pass(&mut self) -> bool {
        self.score += 1;
        if self.score % SPEED_INCREASE_RATE == 0 && self.speed < MAX_SPEED {
            self.speed = (self.speed + SPEED_INCREMENT).min(MAX_SPEED);
            return true;
        }
        false
    }
}
