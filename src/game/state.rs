//! Top-level game state and the Playing/GameOver state machine.
//!
//! `step` runs one fixed frame. It never renders and never touches audio or
//! storage; side effects are reported as `GameEvent`s for the caller to act on.

use super::animation::AnimationCycle;
use super::background::Background;
use super::obstacle::Obstacle;
use super::player::Player;
use super::session::Session;
use crate::core::constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Side effects produced by a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Jumped,
    Hurt { health_left: u8 },
    ObstaclePassed { score: u32 },
    SpeedUp { speed: f32 },
    /// Health reached zero. `previous_high` is the high score before this run.
    GameOver { score: u32, previous_high: u32 },
    Restarted,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub player: Player,
    pub obstacle: Obstacle,
    pub background: Background,
    pub session: Session,
    /// Best score seen so far, including the current run once it ends.
    pub high_score: u32,
    /// Pulsing heart icons in the HUD.
    pub hearts: AnimationCycle,
    /// Playing frames stepped since startup.
    pub frame_count: u64,
    rng: StdRng,
}

impl GameState {
    pub fn new(seed: u64, background: Background, high_score: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let obstacle = Obstacle::new(&mut rng);
        Self {
            phase: Phase::Playing,
            player: Player::new(),
            obstacle,
            background,
            session: Session::new(),
            high_score,
            hearts: AnimationCycle::new(HEART_ANIM_FRAMES, HEART_ANIM_STEP),
            frame_count: 0,
            rng,
        }
    }

    /// Default background, no stored high score.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Background::default(), 0)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// High score as shown on screen: the stored best or the live score.
    pub fn displayed_high_score(&self) -> u32 {
        self.high_score.max(self.session.score)
    }

    /// Run one frame. `jump_pressed` is the jump/confirm key, pressed since
    /// the previous frame.
    pub fn step(&mut self, jump_pressed: bool) -> Vec<GameEvent> {
        match self.phase {
            Phase::Playing => self.step_playing(jump_pressed),
            Phase::GameOver => {
                if jump_pressed {
                    self.restart();
                    vec![GameEvent::Restarted]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn step_playing(&mut self, jump_pressed: bool) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.frame_count += 1;

        if jump_pressed && self.player.jump() {
            events.push(GameEvent::Jumped);
        }

        self.background.advance();
        self.player.advance();
        // Blink countdown runs before the collision gate below.
        self.player.render_visible();
        self.obstacle.advance(self.session.speed);

        if self.obstacle.has_passed() {
            let sped_up = self.session.record_pass();
            events.push(GameEvent::ObstaclePassed {
                score: self.session.score,
            });
            self.obstacle.reset(&mut self.rng);
            if sped_up {
                events.push(GameEvent::SpeedUp {
                    speed: self.session.speed,
                });
            }
        }

        if !self.player.is_invulnerable()
            && self.player.hitbox().overlaps(&self.obstacle.hitbox())
            && self.player.take_hit()
        {
            events.push(GameEvent::Hurt {
                health_left: self.player.health,
            });
            self.obstacle.reset(&mut self.rng);
        }

        self.hearts.advance();

        if self.player.is_dead() {
            let previous_high = self.high_score;
            self.high_score = self.high_score.max(self.session.score);
            self.phase = Phase::GameOver;
            events.push(GameEvent::GameOver {
                score: self.session.score,
                previous_high,
            });
        }

        events
    }

    /// Fresh player, obstacle and session; the background and high score carry over.
    fn restart(&mut self) {
        self.player = Player::new();
        self.obstacle = Obstacle::new(&mut self.rng);
        self.session = Session::new();
        self.phase = Phase::Playing;
    }
}
