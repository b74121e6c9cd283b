//! The player ship

use glam::Vec2;

use super::projectile::WeaponKind;
use crate::Tuning;
use crate::assets::{TextureInfo, TextureLease};
use crate::consts::{SHIP_MAX_HEALTH, SHIP_SPEED, SHIP_SPRITE_SCALE};
use crate::tuning::WeaponProfile;

/// Directional keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player's ship
///
/// Owns its sprite lease, so the texture is released whenever the ship is
/// dropped or replaced.
#[derive(Debug)]
pub struct Ship {
    pub pos: Vec2,
    /// Raw health; goes negative on a heavy hit, see [`Ship::reported_health`]
    health: i32,
    alive: bool,
    speed: f32,
    radius: f32,
    laser: WeaponProfile,
    bullet: WeaponProfile,
    sprite: Option<TextureLease>,
}

impl Ship {
    pub fn new(pos: Vec2, tuning: &Tuning, sprite: Option<TextureLease>) -> Self {
        let radius = sprite
            .as_ref()
            .map(|lease| lease.info().width as f32 * SHIP_SPRITE_SCALE * 0.5)
            .unwrap_or(tuning.ship_fallback_radius);
        Self {
            pos,
            health: SHIP_MAX_HEALTH,
            alive: true,
            speed: SHIP_SPEED,
            radius,
            laser: tuning.laser,
            bullet: tuning.bullet,
            sprite,
        }
    }

    /// Move from held keys. Axes are independent, so diagonals are √2 faster.
    /// A dead ship drifts downward instead.
    pub fn advance(&mut self, dt: f32, input: &MoveInput) {
        let step = self.speed * dt;
        if self.alive {
            if input.up {
                self.pos.y -= step;
            }
            if input.down {
                self.pos.y += step;
            }
            if input.left {
                self.pos.x -= step;
            }
            if input.right {
                self.pos.x += step;
            }
        } else {
            self.pos.y += step;
        }
    }

    /// Subtract health; a negative amount heals. Ignored once dead.
    pub fn apply_damage(&mut self, amount: i32) {
        if !self.alive {
            return;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
        }
    }

    /// Heal by `amount` (no upper clamp)
    pub fn heal(&mut self, amount: i32) {
        self.apply_damage(-amount);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Health for display, never below zero
    #[inline]
    pub fn reported_health(&self) -> i32 {
        self.health.max(0)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Where projectiles appear: the top of the ship
    #[inline]
    pub fn nose(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, self.radius)
    }

    fn profile(&self, weapon: WeaponKind) -> WeaponProfile {
        match weapon {
            WeaponKind::Laser => self.laser,
            WeaponKind::Bullet => self.bullet,
        }
    }

    /// Shots per second
    pub fn fire_rate(&self, weapon: WeaponKind) -> f32 {
        self.profile(weapon).fire_rate
    }

    /// Pixel gap between consecutive shots
    pub fn spacing(&self, weapon: WeaponKind) -> f32 {
        self.profile(weapon).spacing
    }

    /// Seconds between shots
    pub fn fire_interval(&self, weapon: WeaponKind) -> f32 {
        1.0 / self.fire_rate(weapon)
    }

    pub fn projectile_speed(&self, weapon: WeaponKind) -> f32 {
        let profile = self.profile(weapon);
        profile.spacing * profile.fire_rate
    }

    pub fn sprite(&self) -> Option<TextureInfo> {
        self.sprite.as_ref().map(TextureLease::info)
    }
}
