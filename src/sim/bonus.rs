//! Healing bonuses drifting across the play area

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Body, Bounds};
use crate::consts::{BONUS_HEAL, BONUS_RADIUS, BONUS_SPEED_MAX, BONUS_SPEED_MIN};
use crate::{Edge, angle_to_dir};

/// A pickup that heals the ship on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    pub id: u32,
    pub body: Body,
    pub radius: f32,
    pub heal: i32,
}

/// Heading range (radians) that carries a bonus from `edge` into the play area
fn inward_arc(edge: Edge) -> (f32, f32) {
    match edge {
        Edge::Top => (PI / 6.0, 5.0 * PI / 6.0),
        Edge::Right => (2.0 * PI / 3.0, 4.0 * PI / 3.0),
        Edge::Bottom => (7.0 * PI / 6.0, 11.0 * PI / 6.0),
        Edge::Left => (-PI / 3.0, PI / 3.0),
    }
}

impl Bonus {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            body: Body::moving(pos, vel),
            radius: BONUS_RADIUS,
            heal: BONUS_HEAL,
        }
    }

    /// Spawn just outside a random edge with an inward-biased heading
    pub fn spawn<R: Rng>(id: u32, bounds: &Bounds, rng: &mut R) -> Self {
        let edge = Edge::random(rng);
        let pos = edge.point_outside(rng, bounds.width, bounds.height, BONUS_RADIUS);
        let (lo, hi) = inward_arc(edge);
        let angle = rng.random_range(lo..=hi);
        let speed = rng.random_range(BONUS_SPEED_MIN..=BONUS_SPEED_MAX);
        Self::new(id, pos, angle_to_dir(angle) * speed)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Drift. Returns false once outside the play area padded by the bonus radius.
    pub fn advance(&mut self, dt: f32, bounds: &Bounds) -> bool {
        self.body.integrate(dt);
        bounds.contains_padded(self.body.pos, self.radius)
    }
}
