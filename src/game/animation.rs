//! Looping sprite animation driven by a fractional phase counter.
//!
//! The phase advances by a fixed fractional step each frame and wraps at the
//! sequence length; the displayed frame is the truncated phase.

/// Map a phase to a frame index in a sequence of `len` frames.
pub fn frame_at(phase: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (phase.max(0.0) as usize).min(len - 1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCycle {
    frames: usize,
    step: f32,
    phase: f32,
}

impl AnimationCycle {
    pub fn new(frames: usize, step: f32) -> Self {
        Self {
            frames,
            step,
            phase: 0.0,
        }
    }

    /// Move the phase forward one frame's worth, wrapping at the cycle length.
    pub fn advance(&mut self) {
        if self.frames == 0 {
            return;
        }
        self.phase = (self.phase + self.step) % self.frames as f32;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Index of the frame currently shown.
    pub fn frame(&self) -> usize {
        frame_at(self.phase, self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_at_truncates() {
        assert_eq!(frame_at(0.0, 10), 0);
        assert_eq!(frame_at(0.99, 10), 0);
        assert_eq!(frame_at(1.0, 10), 1);
        assert_eq!(frame_at(9.8, 10), 9);
    }

    #[test]
    fn test_frame_at_stays_in_range() {
        assert_eq!(frame_at(10.0, 10), 9);
        assert_eq!(frame_at(-3.0, 10), 0);
        assert_eq!(frame_at(4.0, 0), 0);
    }

    #[test]
    fn test_cycle_advances_after_four_quarter_steps() {
        let mut cycle = AnimationCycle::new(10, 0.25);
        for _ in 0..4 {
            cycle.advance();
        }
        assert_eq!(cycle.frame(), 1);
    }

    #[test]
    fn test_cycle_wraps_to_start() {
        let mut cycle = AnimationCycle::new(4, 0.5);
        for _ in 0..8 {
            cycle.advance();
        }
        assert_eq!(cycle.frame(), 0);
        assert!(cycle.phase() < 4.0);
    }

    #[test]
    fn test_every_frame_is_shown() {
        let mut cycle = AnimationCycle::new(8, 0.1);
        let mut seen = [false; 8];
        for _ in 0..200 {
            cycle.advance();
            seen[cycle.frame()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
