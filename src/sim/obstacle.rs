//! Polygon obstacles
//!
//! Obstacles enter from outside the play area aimed roughly at its center,
//! spin as they travel, and take damage from projectiles until destroyed.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Body, Bounds};
use crate::consts::*;
use crate::{Edge, random_in_disk};

/// Obstacle size class; the discriminant is the size multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Small = 1,
    Medium = 2,
    Large = 4,
    VeryLarge = 8,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::VeryLarge,
    ];

    #[inline]
    pub fn size(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn radius(self) -> f32 {
        OBSTACLE_RADIUS_UNIT * self.size() as f32
    }

    pub fn max_hp(self) -> i32 {
        match self {
            SizeClass::Small => 10,
            SizeClass::Medium => 50,
            SizeClass::Large => 200,
            SizeClass::VeryLarge => 500,
        }
    }

    pub fn base_damage(self) -> i32 {
        match self {
            SizeClass::Small => 5,
            SizeClass::Medium => 10,
            SizeClass::Large => 15,
            SizeClass::VeryLarge => 10,
        }
    }

    /// Damage dealt to the ship on contact
    #[inline]
    pub fn contact_damage(self) -> i32 {
        self.base_damage() * self.size() as i32
    }

    /// Points awarded when a projectile destroys an obstacle of this class
    pub fn score(self) -> u64 {
        match self {
            SizeClass::Small => 2,
            SizeClass::Medium => 4,
            SizeClass::Large => 8,
            SizeClass::VeryLarge => 10,
        }
    }

    /// Polygon side count used for drawing
    pub fn sides(self) -> u32 {
        match self {
            SizeClass::Small => 3,
            SizeClass::Medium => 4,
            SizeClass::Large => 5,
            SizeClass::VeryLarge => 8,
        }
    }

    /// Weighted pick from a 0..=99 roll: 40% small, 25% medium, 20% large, 15% very large
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..40 => SizeClass::Small,
            40..65 => SizeClass::Medium,
            65..85 => SizeClass::Large,
            _ => SizeClass::VeryLarge,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_roll(rng.random_range(0..=99))
    }
}

/// Which size class newly spawned obstacles get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpawnMode {
    Fixed(SizeClass),
    #[default]
    Random,
}

impl SpawnMode {
    /// Mode bound to size-select key `index` (0-based, keys 1 to 5)
    pub fn from_key(index: usize) -> Option<Self> {
        match index {
            0 => Some(SpawnMode::Fixed(SizeClass::Small)),
            1 => Some(SpawnMode::Fixed(SizeClass::Medium)),
            2 => Some(SpawnMode::Fixed(SizeClass::Large)),
            3 => Some(SpawnMode::Random),
            4 => Some(SpawnMode::Fixed(SizeClass::VeryLarge)),
            _ => None,
        }
    }

    pub fn pick<R: Rng>(self, rng: &mut R) -> SizeClass {
        match self {
            SpawnMode::Fixed(size) => size,
            SpawnMode::Random => SizeClass::random(rng),
        }
    }
}

/// A spinning polygon obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub size: SizeClass,
    pub body: Body,
    /// Current hit points; may go negative on the killing blow
    pub hp: i32,
}

impl Obstacle {
    pub fn new(id: u32, size: SizeClass, body: Body) -> Self {
        Self {
            id,
            size,
            body,
            hp: size.max_hp(),
        }
    }

    /// Spawn just outside a random edge, heading for a jittered point near the center
    pub fn spawn<R: Rng>(id: u32, size: SizeClass, bounds: &Bounds, rng: &mut R) -> Self {
        let radius = size.radius();
        let pos = Edge::random(rng).point_outside(rng, bounds.width, bounds.height, radius);

        let aim = random_in_disk(rng, bounds.center(), bounds.min_side() * OBSTACLE_AIM_JITTER);
        let dir = (aim - pos).normalize_or_zero();
        let speed = rng.random_range(OBSTACLE_SPEED_MIN..=OBSTACLE_SPEED_MAX);
        let rotation_speed = rng.random_range(OBSTACLE_ROT_MIN..=OBSTACLE_ROT_MAX);
        let rotation = rng.random_range(0.0..=360.0);

        Self::new(
            id,
            size,
            Body {
                pos,
                vel: dir * speed,
                rotation,
                rotation_speed,
            },
        )
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.size.max_hp()
    }

    #[inline]
    pub fn contact_damage(&self) -> i32 {
        self.size.contact_damage()
    }

    /// Move and spin. Returns false once the obstacle has left the play area
    /// padded by its own radius (expired, remove without scoring).
    pub fn advance(&mut self, dt: f32, bounds: &Bounds) -> bool {
        self.body.integrate(dt);
        bounds.contains_padded(self.body.pos, self.radius())
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }

    /// Remaining health in 0..=1 for the HP bar
    pub fn hp_fraction(&self) -> f32 {
        (self.hp as f32 / self.max_hp() as f32).clamp(0.0, 1.0)
    }
}
