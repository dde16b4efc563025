//! Game models: player, obstacle, parallax background, session, and the
//! frame-stepped state machine that ties them together.

pub mod animation;
pub mod background;
pub mod geometry;
pub mod obstacle;
pub mod player;
pub mod session;
pub mod state;

pub use animation::{frame_at, AnimationCycle};
pub use background::{Background, ParallaxLayer};
pub use geometry::Hitbox;
pub use obstacle::{Obstacle, ObstacleVariant};
pub use player::{AnimationState, Player};
pub use session::Session;
pub use state::{GameEvent, GameState, Phase};
