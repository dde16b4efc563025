//! Everything that turns a `GameState` into pixels on the terminal.

pub mod canvas;
pub mod frame;
pub mod scene;

pub use canvas::{Canvas, Cell};
