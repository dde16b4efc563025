//! Ninja Runner - terminal side-scrolling endless runner.
//!
//! The game logic is exposed here for testing; `main.rs` owns the terminal.

pub mod app;
pub mod assets;
pub mod audio;
pub mod build_info;
pub mod config;
pub mod core;
pub mod game;
pub mod highscore;
pub mod input;
pub mod logging;
pub mod ui;

pub use crate::core::constants;
pub use game::{GameEvent, GameState, Phase};
