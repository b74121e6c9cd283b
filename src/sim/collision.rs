//! Collision passes between the ship, projectiles, obstacles and bonuses
//!
//! Every pass mutates the collections in place without holding references
//! across removals: projectile hits use index-based removal, the lifetime
//! passes use `retain_mut`.

use super::bonus::Bonus;
use super::geometry::Bounds;
use super::obstacle::{Obstacle, SizeClass};
use super::projectile::Projectile;
use super::ship::Ship;
use crate::circles_overlap;

/// Outcome of the projectile vs obstacle pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitSummary {
    /// Projectiles consumed by a hit
    pub hits: u32,
    /// Size classes of obstacles destroyed, in destruction order
    pub destroyed: Vec<SizeClass>,
    pub score: u64,
}

/// Outcome of the obstacle vs ship pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleSummary {
    pub rammed: u32,
    pub expired: u32,
}

/// Outcome of the bonus vs ship pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BonusSummary {
    pub collected: u32,
    pub expired: u32,
}

/// Index of the first obstacle, in collection order, overlapping the projectile
pub fn first_hit(projectile: &Projectile, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| {
        circles_overlap(projectile.pos(), projectile.radius(), o.pos(), o.radius())
    })
}

/// Resolve projectile hits
///
/// Each projectile damages at most one obstacle (the first it overlaps) and is
/// consumed by the hit whether or not the obstacle dies. Obstacles dropping to
/// zero HP are removed and scored by their own size class.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    obstacles: &mut Vec<Obstacle>,
) -> HitSummary {
    let mut summary = HitSummary::default();
    let mut p = 0;
    while p < projectiles.len() {
        let Some(target) = first_hit(&projectiles[p], obstacles) else {
            p += 1;
            continue;
        };

        let damage = projectiles[p].damage();
        obstacles[target].apply_damage(damage);
        if obstacles[target].is_destroyed() {
            let dead = obstacles.remove(target);
            summary.score += dead.size.score();
            summary.destroyed.push(dead.size);
            log::debug!("Obstacle {} ({:?}) destroyed", dead.id, dead.size);
        }
        projectiles.remove(p);
        summary.hits += 1;
    }
    summary
}

/// Ram the ship with overlapping obstacles, move the rest, drop the expired
///
/// Ramming damages the ship and removes the obstacle without scoring. Only a
/// living ship can be rammed.
pub fn resolve_obstacles(
    ship: &mut Ship,
    obstacles: &mut Vec<Obstacle>,
    dt: f32,
    bounds: &Bounds,
) -> ObstacleSummary {
    let mut summary = ObstacleSummary::default();
    obstacles.retain_mut(|obstacle| {
        if ship.is_alive() && circles_overlap(ship.pos, ship.radius(), obstacle.pos(), obstacle.radius())
        {
            ship.apply_damage(obstacle.contact_damage());
            summary.rammed += 1;
            return false;
        }
        if !obstacle.advance(dt, bounds) {
            summary.expired += 1;
            return false;
        }
        true
    });
    summary
}

/// Move bonuses, drop the expired, and let the ship collect the ones it touches
///
/// Bonuses are frozen in place while the ship is dead.
pub fn resolve_bonuses(
    ship: &mut Ship,
    bonuses: &mut Vec<Bonus>,
    dt: f32,
    bounds: &Bounds,
) -> BonusSummary {
    let mut summary = BonusSummary::default();
    if !ship.is_alive() {
        return summary;
    }
    bonuses.retain_mut(|bonus| {
        if !bonus.advance(dt, bounds) {
            summary.expired += 1;
            return false;
        }
        if circles_overlap(ship.pos, ship.radius(), bonus.pos(), bonus.radius) {
            ship.heal(bonus.heal);
            summary.collected += 1;
            return false;
        }
        true
    });
    summary
}
