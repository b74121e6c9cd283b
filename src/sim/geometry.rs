//! Play-area bounds and rigid-body motion shared by every entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// The visible play area, `[0, width] x [0, height]` with y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::screen()
    }
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The fixed 1600x1600 play area
    pub const fn screen() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_padded(p, 0.0)
    }

    /// Containment in the area grown by `pad` on every side
    #[inline]
    pub fn contains_padded(&self, p: Vec2, pad: f32) -> bool {
        p.x >= -pad && p.x <= self.width + pad && p.y >= -pad && p.y <= self.height + pad
    }
}

/// Position, velocity and spin of an entity
///
/// Rotation is in degrees, matching what the drawing backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Body {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    pub fn moving(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            ..Default::default()
        }
    }

    /// Explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.rotation += self.rotation_speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bounds() {
        let b = Bounds::new(100.0, 100.0);
        assert!(b.contains(Vec2::new(0.0, 100.0)));
        assert!(!b.contains(Vec2::new(-0.1, 50.0)));
        assert!(b.contains_padded(Vec2::new(-10.0, 50.0), 10.0));
        assert!(!b.contains_padded(Vec2::new(-10.5, 50.0), 10.0));
        assert_eq!(b.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_integrate() {
        let mut body = Body {
            pos: Vec2::new(1.0, 2.0),
            vel: Vec2::new(10.0, -20.0),
            rotation: 5.0,
            rotation_speed: 90.0,
        };
        body.integrate(0.5);
        assert_eq!(body.pos, Vec2::new(6.0, -8.0));
        assert_eq!(body.rotation, 50.0);
    }
}
