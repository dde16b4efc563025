//! Runs game frames and carries out their side effects: sounds, music volume
//! and the high score record.

use crate::audio::{AudioService, Sfx};
use crate::game::{GameEvent, GameState};
use crate::highscore::ScoreStore;

pub struct App {
    pub state: GameState,
    audio: Box<dyn AudioService>,
    store: Box<dyn ScoreStore>,
}

impl App {
    /// Wrap `state` and start the background music.
    pub fn new(
        state: GameState,
        mut audio: Box<dyn AudioService>,
        store: Box<dyn ScoreStore>,
    ) -> Self {
        audio.start_music();
        audio.set_music_volume(1.0);
        Self {
            state,
            audio,
            store,
        }
    }

    /// Step one frame and act on what happened.
    pub fn frame(&mut self, jump_pressed: bool) -> Vec<GameEvent> {
        let events = self.state.step(jump_pressed);
        for event in &events {
            self.dispatch(event);
        }
        events
    }

    fn dispatch(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Jumped => self.audio.play(Sfx::Jump),
            GameEvent::Hurt { health_left } => {
                tracing::debug!("hit, {} hearts left", health_left);
                self.audio.play(Sfx::Hurt);
            }
            GameEvent::SpeedUp { speed } => tracing::debug!("speed up to {:.1}", speed),
            GameEvent::ObstaclePassed { .. } => {}
            GameEvent::GameOver {
                score,
                previous_high,
            } => {
                self.audio.set_music_volume(0.0);
                self.audio.play(Sfx::Lose);

                if score > previous_high {
                    if let Err(e) = self.store.save(score) {
                        tracing::warn!("could not save high score {}: {}", score, e);
                    }
                }
                // Re-read so the overlay shows what is actually on disk, or
                // this run's score if that is higher.
                let stored = self.store.load();
                self.state.high_score = self.state.high_score.max(stored);

                tracing::info!(
                    "game over after {} frames: score {}, high score {}",
                    self.state.frame_count,
                    score,
                    self.state.high_score
                );
            }
            GameEvent::Restarted => {
                self.audio.set_music_volume(1.0);
                self.audio.silence(Sfx::Lose);
                tracing::info!("restarted");
            }
        }
    }
}
