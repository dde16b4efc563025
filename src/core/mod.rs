//! Tuning constants and frame pacing.

pub mod clock;
pub mod constants;

pub use clock::FrameClock;
pub use constants::*;
