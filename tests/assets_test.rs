//! Integration test: the asset pack shipped in `assets/`
//!
//! Loads the real files and renders a few frames with them.

use ninja_runner::assets::AssetPack;
use ninja_runner::constants::*;
use ninja_runner::game::{Background, GameState, ObstacleVariant, Phase};
use ninja_runner::ui::{scene, Canvas};
use std::path::PathBuf;

fn shipped_assets() -> AssetPack {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    AssetPack::load(&root).expect("shipped assets should load")
}

#[test]
fn test_shipped_pack_is_complete() {
    let assets = shipped_assets();
    assert_eq!(assets.run.len(), PLAYER_ANIM_FRAMES);
    assert_eq!(assets.jump.len(), PLAYER_ANIM_FRAMES);
    assert_eq!(assets.obstacles.len(), ObstacleVariant::ALL.len());
    assert_eq!(assets.layers.len(), BACKGROUND_LAYERS);
    assert_eq!(assets.hearts.len(), HEART_ANIM_FRAMES);
}

#[test]
fn test_obstacle_sprites_match_hitboxes() {
    let assets = shipped_assets();
    for variant in ObstacleVariant::ALL {
        let sprite = assets.obstacle(variant);
        assert_eq!(sprite.width(), variant.width(), "{}", variant.name());
        assert_eq!(sprite.height(), variant.height(), "{}", variant.name());
    }
}

#[test]
fn test_render_with_shipped_pack() {
    let assets = shipped_assets();
    let background = Background::new(&assets.layer_widths(), assets.sky.width());
    let mut state = GameState::new(21, background, 9);
    let mut canvas = Canvas::new(CANVAS_COLS, CANVAS_ROWS);

    for _ in 0..120 {
        state.step(false);
        scene::render(&mut canvas, &state, &assets);
    }
    assert!(canvas.row_text(0).contains("Score:"));
    assert!(canvas.row_text(1).contains("High: 9"));

    state.phase = Phase::GameOver;
    scene::render(&mut canvas, &state, &assets);
    assert!((0..CANVAS_ROWS).any(|r| canvas.row_text(r).contains("GAME OVER!")));
}
