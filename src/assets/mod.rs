//! Startup asset loading.
//!
//! Every sprite is required: a missing or misshapen file stops startup with an
//! error naming the file. Sounds are optional and only located here; the
//! audio service decides what to do with them.

pub mod sprite;

pub use sprite::Sprite;

use crate::core::constants::*;
use crate::game::ObstacleVariant;
use anyhow::{bail, Context};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AssetPack {
    pub run: Vec<Sprite>,
    pub jump: Vec<Sprite>,
    /// Indexed by `ObstacleVariant::index`.
    pub obstacles: Vec<Sprite>,
    pub sky: Sprite,
    /// Scrolling layers, farthest first.
    pub layers: Vec<Sprite>,
    pub hearts: Vec<Sprite>,
    pub game_over: Sprite,
    pub sound_dir: PathBuf,
}

impl AssetPack {
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let player_dir = root.join("player");
        let run = load_sequence(&player_dir, "run", PLAYER_ANIM_FRAMES)?;
        let jump = load_sequence(&player_dir, "jump", PLAYER_ANIM_FRAMES)?;
        for (prefix, frames) in [("run", &run), ("jump", &jump)] {
            for (i, frame) in frames.iter().enumerate() {
                if frame.width() > PLAYER_WIDTH || frame.height() > PLAYER_HEIGHT {
                    bail!(
                        "player sprite {} is {}x{} cells, larger than the {}x{} player",
                        sequence_path(&player_dir, prefix, i).display(),
                        frame.cols(),
                        frame.rows(),
                        PLAYER_WIDTH / CELL_WIDTH,
                        PLAYER_HEIGHT / CELL_HEIGHT
                    );
                }
            }
        }

        let obstacle_dir = root.join("obstacle");
        let obstacles = load_sequence(&obstacle_dir, "ob", ObstacleVariant::ALL.len())?;
        for (variant, sprite) in ObstacleVariant::ALL.iter().zip(&obstacles) {
            if sprite.width() != variant.width() || sprite.height() != variant.height() {
                bail!(
                    "obstacle sprite {} ({}) is {}x{} cells, expected {}x{}",
                    sequence_path(&obstacle_dir, "ob", variant.index()).display(),
                    variant.name(),
                    sprite.cols(),
                    sprite.rows(),
                    variant.width() / CELL_WIDTH,
                    variant.height() / CELL_HEIGHT
                );
            }
        }

        let city = root.join("city");
        let sky = load_sprite(&city.join("1.txt"))?;
        let mut layers = Vec::with_capacity(BACKGROUND_LAYERS);
        for i in 2..=5 {
            layers.push(load_sprite(&city.join(format!("{}.txt", i)))?);
        }
        layers.push(load_sprite(&city.join("new_city.txt"))?);

        let hearts = load_sequence(&root.join("heart"), "heart", HEART_ANIM_FRAMES)?;
        let game_over = load_sprite(&root.join("bg").join("game_over.txt"))?;

        Ok(Self {
            run,
            jump,
            obstacles,
            sky,
            layers,
            hearts,
            game_over,
            sound_dir: root.join("sound"),
        })
    }

    /// Tile width of each scrolling layer, for building the background model.
    pub fn layer_widths(&self) -> Vec<f32> {
        self.layers.iter().map(Sprite::width).collect()
    }

    pub fn obstacle(&self, variant: ObstacleVariant) -> &Sprite {
        &self.obstacles[variant.index()]
    }
}

fn load_sprite(path: &Path) -> anyhow::Result<Sprite> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read sprite {}", path.display()))?;
    Sprite::parse(&text).with_context(|| format!("invalid sprite {}", path.display()))
}

fn sequence_path(dir: &Path, prefix: &str, index: usize) -> PathBuf {
    dir.join(format!("{}{}.txt", prefix, index))
}

/// `dir/{prefix}0.txt` .. `dir/{prefix}{count-1}.txt`
fn load_sequence(dir: &Path, prefix: &str, count: usize) -> anyhow::Result<Vec<Sprite>> {
    (0..count)
        .map(|i| load_sprite(&sequence_path(dir, prefix, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(cols: usize, rows: usize) -> String {
        let row = "#".repeat(cols);
        vec![row; rows].join("\n")
    }

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn write_full_pack(root: &Path) {
        for i in 0..PLAYER_ANIM_FRAMES {
            write(root, &format!("player/run{}.txt", i), &block(5, 5));
            write(root, &format!("player/jump{}.txt", i), &block(6, 4));
        }
        for variant in ObstacleVariant::ALL {
            let cols = (variant.width() / CELL_WIDTH) as usize;
            let rows = (variant.height() / CELL_HEIGHT) as usize;
            write(
                root,
                &format!("obstacle/ob{}.txt", variant.index()),
                &block(cols, rows),
            );
        }
        write(root, "city/1.txt", &block(35, 10));
        for name in ["2", "3", "4", "5", "new_city"] {
            write(root, &format!("city/{}.txt", name), &block(40, 3));
        }
        for i in 0..HEART_ANIM_FRAMES {
            write(root, &format!("heart/heart{}.txt", i), "<3");
        }
        write(root, "bg/game_over.txt", &block(70, 20));
    }

    #[test]
    fn test_load_full_pack() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());

        let pack = AssetPack::load(dir.path()).unwrap();

        assert_eq!(pack.run.len(), PLAYER_ANIM_FRAMES);
        assert_eq!(pack.jump.len(), PLAYER_ANIM_FRAMES);
        assert_eq!(pack.obstacles.len(), 12);
        assert_eq!(pack.layers.len(), BACKGROUND_LAYERS);
        assert_eq!(pack.hearts.len(), HEART_ANIM_FRAMES);
        assert_eq!(pack.layer_widths(), vec![400.0; BACKGROUND_LAYERS]);
        assert_eq!(pack.sound_dir, dir.path().join("sound"));
    }

    #[test]
    fn test_missing_sprite_is_fatal_and_named() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        fs::remove_file(dir.path().join("heart/heart3.txt")).unwrap();

        let err = AssetPack::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("heart3.txt"));
    }

    #[test]
    fn test_missing_layer_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        fs::remove_file(dir.path().join("city/new_city.txt")).unwrap();
        assert!(AssetPack::load(dir.path()).is_err());
    }

    #[test]
    fn test_wrong_obstacle_size_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        write(dir.path(), "obstacle/ob2.txt", &block(1, 1));

        let err = AssetPack::load(dir.path()).unwrap_err().to_string();
        assert!(err.contains("ob2.txt"), "{}", err);
        assert!(err.contains("obstacle"), "{}", err);
    }

    #[test]
    fn test_oversized_player_frame_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        write(dir.path(), "player/jump4.txt", &block(7, 2));

        let err = AssetPack::load(dir.path()).unwrap_err().to_string();
        assert!(err.contains("jump4.txt"), "{}", err);
        assert!(err.contains("7x2"), "{}", err);
    }

    #[test]
    fn test_tall_run_frame_is_named() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        write(dir.path(), "player/run0.txt", &block(2, 6));

        let err = AssetPack::load(dir.path()).unwrap_err().to_string();
        assert!(err.contains("run0.txt"), "{}", err);
    }

    #[test]
    fn test_empty_sprite_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        write(dir.path(), "bg/game_over.txt", "");
        let err = AssetPack::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("game_over.txt"));
    }

    #[test]
    fn test_missing_sound_dir_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        write_full_pack(dir.path());
        let pack = AssetPack::load(dir.path()).unwrap();
        assert!(!pack.sound_dir.exists());
    }
}
