//! The single recycled obstacle.

use super::geometry::Hitbox;
use crate::core::constants::*;
use rand::Rng;

/// Visual skins for the obstacle. Each skin has its own footprint, so the
/// obstacle's resting height changes when the skin does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleVariant {
    Crate,
    Barrel,
    Spikes,
    Rock,
    Boulder,
    Cone,
    Hydrant,
    TrashCan,
    Tire,
    Stump,
    Sandbag,
    Bollard,
}

impl ObstacleVariant {
    pub const ALL: [ObstacleVariant; 12] = [
        Self::Crate,
        Self::Barrel,
        Self::Spikes,
        Self::Rock,
        Self::Boulder,
        Self::Cone,
        Self::Hydrant,
        Self::TrashCan,
        Self::Tire,
        Self::Stump,
        Self::Sandbag,
        Self::Bollard,
    ];

    /// Pick a skin uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Position in `ALL`, which is also the sprite file number (`ob{index}`).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Width in logical units.
    pub fn width(&self) -> f32 {
        match self {
            Self::Crate => 50.0,
            Self::Barrel => 40.0,
            Self::Spikes => 60.0,
            Self::Rock => 50.0,
            Self::Boulder => 60.0,
            Self::Cone => 30.0,
            Self::Hydrant => 30.0,
            Self::TrashCan => 40.0,
            Self::Tire => 50.0,
            Self::Stump => 50.0,
            Self::Sandbag => 60.0,
            Self::Bollard => 20.0,
        }
    }

    /// Height in logical units.
    pub fn height(&self) -> f32 {
        match self {
            Self::Crate => 60.0,
            Self::Barrel => 60.0,
            Self::Spikes => 20.0,
            Self::Rock => 40.0,
            Self::Boulder => 60.0,
            Self::Cone => 40.0,
            Self::Hydrant => 60.0,
            Self::TrashCan => 60.0,
            Self::Tire => 40.0,
            Self::Stump => 40.0,
            Self::Sandbag => 40.0,
            Self::Bollard => 60.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Crate => "Crate",
            Self::Barrel => "Barrel",
            Self::Spikes => "Spikes",
            Self::Rock => "Rock",
            Self::Boulder => "Boulder",
            Self::Cone => "Cone",
            Self::Hydrant => "Hydrant",
            Self::TrashCan => "Trash Can",
            Self::Tire => "Tire",
            Self::Stump => "Stump",
            Self::Sandbag => "Sandbag",
            Self::Bollard => "Bollard",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f32,
    /// Top edge, always resting on the ground for the current variant.
    pub y: f32,
    pub variant: ObstacleVariant,
}

impl Obstacle {
    /// A fresh obstacle at the right edge of the screen.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let variant = ObstacleVariant::random(rng);
        Self {
            x: WIDTH,
            y: resting_y(variant),
            variant,
        }
    }

    /// Scroll left by `speed`.
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// True once the obstacle is entirely past the left edge.
    pub fn has_passed(&self) -> bool {
        self.x + self.width() < 0.0
    }

    /// Recycle: new random skin, back to the right edge, re-seated on the ground.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.variant = ObstacleVariant::random(rng);
        self.x = WIDTH;
        self.y = resting_y(self.variant);
    }

    pub fn width(&self) -> f32 {
        self.variant.width()
    }

    pub fn height(&self) -> f32 {
        self.variant.height()
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width(), self.height())
    }
}

fn resting_y(variant: ObstacleVariant) -> f32 {
    GROUND_Y - variant.height()
}
