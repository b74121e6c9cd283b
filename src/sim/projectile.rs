//! Ship projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Body, Bounds};
use crate::consts::{BULLET_RADIUS, LASER_RADIUS};

/// Selectable weapon
///
/// Laser: slow fire, high damage, thin bolt. Bullet: fast fire, low damage, round shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Laser,
    Bullet,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 2] = [WeaponKind::Laser, WeaponKind::Bullet];

    /// Next weapon in the switch cycle
    pub fn next(self) -> Self {
        match self {
            WeaponKind::Laser => WeaponKind::Bullet,
            WeaponKind::Bullet => WeaponKind::Laser,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Laser => "LASER",
            WeaponKind::Bullet => "BULLET",
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Laser => 20,
            WeaponKind::Bullet => 10,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Laser => LASER_RADIUS,
            WeaponKind::Bullet => BULLET_RADIUS,
        }
    }
}

/// A projectile flying straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: WeaponKind,
    pub body: Body,
    damage: i32,
}

impl Projectile {
    pub fn new(id: u32, kind: WeaponKind, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind,
            body: Body::moving(pos, Vec2::new(0.0, -speed)),
            damage: kind.damage(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    /// Move forward. Returns true once the projectile has left the visible area.
    pub fn advance(&mut self, dt: f32, bounds: &Bounds) -> bool {
        self.body.integrate(dt);
        !bounds.contains(self.body.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_profiles() {
        let bullet = Projectile::new(1, WeaponKind::Bullet, Vec2::ZERO, 440.0);
        assert_eq!(bullet.damage(), 10);
        assert_eq!(bullet.radius(), 5.0);

        let laser = Projectile::new(2, WeaponKind::Laser, Vec2::ZERO, 720.0);
        assert_eq!(laser.damage(), 20);
        assert_eq!(laser.radius(), 2.0);
        assert_eq!(laser.body.vel, Vec2::new(0.0, -720.0));
    }

    #[test]
    fn test_weapon_cycle() {
        assert_eq!(WeaponKind::default(), WeaponKind::Laser);
        assert_eq!(WeaponKind::Laser.next(), WeaponKind::Bullet);
        assert_eq!(WeaponKind::Bullet.next(), WeaponKind::Laser);
    }

    #[test]
    fn test_expires_past_top_edge() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = Projectile::new(1, WeaponKind::Bullet, Vec2::new(50.0, 10.0), 100.0);
        assert!(!p.advance(0.1, &bounds)); // y = 0
        assert!(p.advance(0.01, &bounds)); // y = -1
    }
}
