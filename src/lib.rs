//! Poly Siege - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, spawning, scoring)
//! - `renderer`: Frame hand-off to a drawing backend (draw commands, HUD, tessellation)
//! - `platform`: Delta time / input / close-signal abstraction and the outer loop
//! - `assets`: Texture leases scoped to the ship's lifetime
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (logical units, fixed)
    pub const SCREEN_WIDTH: f32 = 1600.0;
    pub const SCREEN_HEIGHT: f32 = 1600.0;

    /// Radius of one obstacle size unit (radius = unit * size class)
    pub const OBSTACLE_RADIUS_UNIT: f32 = 16.0;
    pub const OBSTACLE_SPEED_MIN: f32 = 125.0;
    pub const OBSTACLE_SPEED_MAX: f32 = 250.0;
    /// Rotation speed range (degrees/s)
    pub const OBSTACLE_ROT_MIN: f32 = 50.0;
    pub const OBSTACLE_ROT_MAX: f32 = 240.0;
    /// Aim jitter disk radius as a fraction of min(width, height)
    pub const OBSTACLE_AIM_JITTER: f32 = 0.1;

    /// Bonus defaults
    pub const BONUS_RADIUS: f32 = 25.0;
    pub const BONUS_HEAL: i32 = 10;
    pub const BONUS_SPEED_MIN: f32 = 100.0;
    pub const BONUS_SPEED_MAX: f32 = 200.0;

    /// Ship defaults
    pub const SHIP_MAX_HEALTH: i32 = 100;
    pub const SHIP_SPEED: f32 = 250.0;
    /// Sprite scale; ship radius = sprite width * scale / 2
    pub const SHIP_SPRITE_SCALE: f32 = 0.05;
    pub const SHIP_SPRITE_PATH: &str = "dog.png";

    /// Projectile radii
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const LASER_RADIUS: f32 = 2.0;
    /// Visual length of a laser bolt (drawn above its position)
    pub const LASER_LENGTH: f32 = 30.0;
}

/// Identifies one of the four play-area edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Uniformly pick one of the four edges
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..4)]
    }

    /// A point just outside this edge, `margin` beyond it, at a uniform
    /// coordinate along the edge.
    pub fn point_outside<R: Rng>(
        self,
        rng: &mut R,
        width: f32,
        height: f32,
        margin: f32,
    ) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(rng.random_range(0.0..=width), -margin),
            Edge::Right => Vec2::new(width + margin, rng.random_range(0.0..=height)),
            Edge::Bottom => Vec2::new(rng.random_range(0.0..=width), height + margin),
            Edge::Left => Vec2::new(-margin, rng.random_range(0.0..=height)),
        }
    }
}

/// Uniform random point inside a disk of the given radius centered on `center`
///
/// Angle and radius are drawn independently, so points cluster toward the center.
#[inline]
pub fn random_in_disk<R: Rng>(rng: &mut R, center: Vec2, radius: f32) -> Vec2 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let r = if radius > 0.0 {
        rng.random_range(0.0..=radius)
    } else {
        0.0
    };
    center + angle_to_dir(angle) * r
}

/// Unit direction for an angle in radians (y grows downward on screen)
#[inline]
pub fn angle_to_dir(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// True if two circles overlap (strictly closer than the sum of their radii)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}
