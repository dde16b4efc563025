//! Draws one frame of the game into a [`Canvas`]: the parallax city, the
//! runner, the obstacle and the HUD while playing, or the game-over screen.

use super::canvas::{to_cell, Canvas, Cell};
use crate::assets::AssetPack;
use crate::core::constants::*;
use crate::game::{AnimationState, GameState, ObstacleVariant, Phase};
use ratatui::style::Color;

// ── Ground rendering characters ─────────────────────────────────────
const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';

/// Farthest layer first, matching `AssetPack::layers`.
const LAYER_COLORS: [Color; BACKGROUND_LAYERS] = [
    Color::DarkGray,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
];

const SKY_COLOR: Color = Color::DarkGray;
const PLAYER_COLOR: Color = Color::White;
const HEART_COLOR: Color = Color::LightRed;
const HUD_COLOR: Color = Color::White;

/// Render the whole scene for the current phase.
pub fn render(canvas: &mut Canvas, state: &GameState, assets: &AssetPack) {
    canvas.clear();
    match state.phase {
        Phase::Playing => render_playing(canvas, state, assets),
        Phase::GameOver => render_game_over(canvas, state, assets),
    }
}

fn render_playing(canvas: &mut Canvas, state: &GameState, assets: &AssetPack) {
    for x in state.background.sky_tile_positions() {
        canvas.blit(&assets.sky, x, 0.0, SKY_COLOR);
    }

    for (i, (layer, sprite)) in state
        .background
        .layers
        .iter()
        .zip(&assets.layers)
        .enumerate()
    {
        let color = LAYER_COLORS[i % LAYER_COLORS.len()];
        let y = GROUND_Y - sprite.height();
        for x in layer.tile_positions() {
            canvas.blit(sprite, x, y, color);
        }
    }

    render_ground(canvas);

    let player = &state.player;
    if player.visible {
        let frames = match player.animation_state {
            AnimationState::Running => &assets.run,
            AnimationState::Jumping => &assets.jump,
        };
        if let Some(sprite) = frames.get(player.frame_index()) {
            // Feet on the bottom edge of the hitbox.
            let y = player.y + PLAYER_HEIGHT - sprite.height();
            canvas.blit(sprite, player.x, y, PLAYER_COLOR);
        }
    }

    let obstacle = &state.obstacle;
    canvas.blit(
        assets.obstacle(obstacle.variant),
        obstacle.x,
        obstacle.y,
        obstacle_color(obstacle.variant),
    );

    if let Some(heart) = assets.hearts.get(state.hearts.frame()) {
        for i in 0..state.player.health {
            canvas.blit(heart, 10.0 + i as f32 * HEART_SPACING, 10.0, HEART_COLOR);
        }
    }

    canvas.draw_text(
        &format!("Score: {}", state.session.score),
        WIDTH - 120.0,
        10.0,
        HUD_COLOR,
    );
    canvas.draw_text(
        &format!("High: {}", state.displayed_high_score()),
        WIDTH - 120.0,
        35.0,
        Color::Yellow,
    );
}

fn render_ground(canvas: &mut Canvas) {
    let (_, ground_row) = to_cell(0.0, GROUND_Y);
    let ground_row = ground_row.clamp(0, canvas.rows() as i32) as u16;
    canvas.fill_rows_from(
        ground_row,
        Cell {
            ch: GROUND_SUB,
            fg: Color::DarkGray,
            bg: Color::Reset,
        },
    );
    for col in 0..canvas.cols() as i32 {
        canvas.set(
            col,
            ground_row as i32,
            Cell {
                ch: GROUND_CHAR,
                fg: Color::Gray,
                bg: Color::Reset,
            },
        );
    }
}

fn render_game_over(canvas: &mut Canvas, state: &GameState, assets: &AssetPack) {
    canvas.blit(&assets.game_over, 0.0, 0.0, Color::DarkGray);

    let center = WIDTH / 2.0;
    canvas.draw_text_centered("GAME OVER!", center, 100.0, Color::Red);
    canvas.draw_text_centered("Press SPACE to play again.", center, 160.0, Color::White);
    canvas.draw_text_centered(
        &format!("High Score: {}", state.displayed_high_score()),
        center,
        200.0,
        Color::Yellow,
    );
}

fn obstacle_color(variant: ObstacleVariant) -> Color {
    match variant {
        ObstacleVariant::Crate | ObstacleVariant::Stump => Color::Yellow,
        ObstacleVariant::Barrel | ObstacleVariant::Tire => Color::LightRed,
        ObstacleVariant::Spikes | ObstacleVariant::Bollard => Color::LightCyan,
        ObstacleVariant::Rock | ObstacleVariant::Boulder => Color::Gray,
        ObstacleVariant::Cone | ObstacleVariant::Hydrant => Color::Red,
        ObstacleVariant::TrashCan | ObstacleVariant::Sandbag => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;
    use std::path::PathBuf;

    fn block(ch: char, cols: usize, rows: usize) -> Sprite {
        let row: String = std::iter::repeat(ch).take(cols).collect();
        Sprite::parse(&vec![row; rows].join("\n")).unwrap()
    }

    fn pack() -> AssetPack {
        AssetPack {
            run: (0..PLAYER_ANIM_FRAMES).map(|_| block('R', 4, 5)).collect(),
            jump: (0..PLAYER_ANIM_FRAMES).map(|_| block('J', 4, 5)).collect(),
            obstacles: ObstacleVariant::ALL
                .iter()
                .map(|v| {
                    block(
                        'O',
                        (v.width() / CELL_WIDTH) as usize,
                        (v.height() / CELL_HEIGHT) as usize,
                    )
                })
                .collect(),
            sky: block('.', 35, 2),
            layers: (0..BACKGROUND_LAYERS).map(|_| block('#', 70, 1)).collect(),
            hearts: (0..HEART_ANIM_FRAMES).map(|_| block('H', 2, 1)).collect(),
            game_over: block('~', 70, 20),
            sound_dir: PathBuf::from("sound"),
        }
    }

    fn draw(state: &GameState) -> Canvas {
        let mut canvas = Canvas::new(CANVAS_COLS, CANVAS_ROWS);
        render(&mut canvas, state, &pack());
        canvas
    }

    #[test]
    fn test_playing_shows_runner_on_ground() {
        let state = GameState::with_seed(1);
        let canvas = draw(&state);

        // Player bottom at 350 -> last sprite row is row 16, first row 12.
        assert_eq!(&canvas.row_text(16)[2..6], "RRRR");
        assert_eq!(&canvas.row_text(12)[2..6], "RRRR");
        assert!(!canvas.row_text(11).contains('R'));
    }

    #[test]
    fn test_playing_draws_ground_and_sky() {
        let canvas = draw(&GameState::with_seed(1));
        assert!(canvas.row_text(17).chars().all(|c| c == GROUND_CHAR));
        assert!(canvas.row_text(19).chars().all(|c| c == GROUND_SUB));
        assert!(canvas.row_text(1).contains('.'));
    }

    #[test]
    fn test_hud_shows_hearts_and_score() {
        let mut state = GameState::with_seed(1);
        state.session.score = 7;
        state.high_score = 3;
        state.player.health = 2;
        let canvas = draw(&state);

        let top = canvas.row_text(0);
        assert_eq!(top.matches("HH").count(), 2);
        assert!(top.contains("Score: 7"));
        assert!(canvas.row_text(1).contains("High: 7"));
    }

    #[test]
    fn test_hidden_player_not_drawn() {
        let mut state = GameState::with_seed(1);
        state.player.visible = false;
        let canvas = draw(&state);
        assert!(!canvas.row_text(14).contains('R'));
    }

    #[test]
    fn test_jumping_uses_jump_frames() {
        let mut state = GameState::with_seed(1);
        state.player.animation_state = AnimationState::Jumping;
        state.player.y = 150.0;
        let canvas = draw(&state);
        assert!(canvas.row_text(8).contains("JJJJ"));
        assert!(!canvas.row_text(16).contains('J'));
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = GameState::with_seed(1);
        state.phase = Phase::GameOver;
        state.high_score = 42;
        let canvas = draw(&state);

        assert!(canvas.row_text(5).contains("GAME OVER!"));
        assert!(canvas.row_text(8).contains("Press SPACE to play again."));
        assert!(canvas.row_text(10).contains("High Score: 42"));
        assert!(canvas.row_text(19).starts_with('~'));
    }
}
