// Render surface (logical units, y grows downward)
pub const WIDTH: f32 = 700.0;
pub const HEIGHT: f32 = 400.0;
pub const GROUND_OFFSET: f32 = 50.0;

/// Top of the ground strip. Everything standing on the ground has its
/// bottom edge here.
pub const GROUND_Y: f32 = HEIGHT - GROUND_OFFSET;

// Frame timing
pub const FPS: u32 = 60;
pub const FRAME_MS: u64 = 1000 / FPS as u64;
pub const MAX_FRAME_CATCHUP_MS: u64 = 100;

// Player
pub const PLAYER_X: f32 = 25.0;
pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 100.0;
pub const PLAYER_GROUND_Y: f32 = HEIGHT - PLAYER_HEIGHT - GROUND_OFFSET;
pub const JUMP_STRENGTH: f32 = 12.0;
pub const GRAVITY: f32 = 0.5;
pub const MAX_JUMPS: u8 = 2;
pub const MAX_HEALTH: u8 = 3;
pub const INVULNERABILITY_FRAMES: u32 = 30;
pub const BLINK_PERIOD: u32 = 10;

// Animation
pub const PLAYER_ANIM_FRAMES: usize = 10;
pub const PLAYER_ANIM_STEP: f32 = 0.2;
pub const HEART_ANIM_FRAMES: usize = 8;
pub const HEART_ANIM_STEP: f32 = 0.1;

// Difficulty ramp
pub const INITIAL_SPEED: f32 = 4.0;
pub const SPEED_INCREMENT: f32 = 0.6;
pub const SPEED_INCREASE_RATE: u32 = 2; // every 2 points
pub const MAX_SPEED: f32 = 15.0;

// Background
pub const BACKGROUND_LAYERS: usize = 5;

// Canvas cell size (logical units per terminal cell)
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;
pub const CANVAS_COLS: u16 = 70; // WIDTH / CELL_WIDTH
pub const CANVAS_ROWS: u16 = 20; // HEIGHT / CELL_HEIGHT

// HUD
pub const HEART_SPACING: f32 = 40.0;
