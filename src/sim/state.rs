//! Game state and core simulation types
//!
//! `GameState` exclusively owns every entity collection, the spawn and fire
//! timers, the score and the single ship. Entities never reference each other.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bonus::Bonus;
use super::geometry::Bounds;
use super::obstacle::{Obstacle, SpawnMode};
use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use crate::Tuning;
use crate::assets::{SharedTextures, TextureLease};
use crate::consts::SHIP_SPRITE_PATH;

/// Complete simulation state
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub bounds: Bounds,
    pub ship: Ship,
    /// Live obstacles in spawn order (collision scans use this order)
    pub obstacles: Vec<Obstacle>,
    pub projectiles: Vec<Projectile>,
    pub bonuses: Vec<Bonus>,
    pub weapon: WeaponKind,
    pub spawn_mode: SpawnMode,
    /// Seconds since the last obstacle spawn
    pub spawn_timer: f32,
    /// Current obstacle spawn interval, redrawn after each spawn
    pub spawn_interval: f32,
    /// Seconds since the last bonus spawn attempt
    pub bonus_timer: f32,
    /// Time banked toward the next shot
    pub fire_timer: f32,
    pub score: u64,
    /// Simulated seconds since the state was created
    pub time: f64,
    /// Frames simulated
    pub frames: u64,
    /// Ship sprites come from here when present
    textures: Option<SharedTextures>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and no texture backend
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::build(seed, tuning, None)
    }

    /// Create a new game state whose ships carry a sprite from `textures`
    pub fn with_textures(seed: u64, tuning: Tuning, textures: SharedTextures) -> Self {
        Self::build(seed, tuning, Some(textures))
    }

    fn build(seed: u64, tuning: Tuning, textures: Option<SharedTextures>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_interval = rng.random_range(tuning.spawn_interval_min..=tuning.spawn_interval_max);
        let bounds = Bounds::screen();
        let ship = make_ship(&bounds, &tuning, textures.as_ref());
        Self {
            seed,
            rng,
            tuning,
            bounds,
            ship,
            obstacles: Vec::with_capacity(256),
            projectiles: Vec::with_capacity(1024),
            bonuses: Vec::new(),
            weapon: WeaponKind::default(),
            spawn_mode: SpawnMode::default(),
            spawn_timer: 0.0,
            spawn_interval,
            bonus_timer: 0.0,
            fire_timer: 0.0,
            score: 0,
            time: 0.0,
            frames: 0,
            textures,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start over after a game over
    ///
    /// Replaces the ship (releasing the old sprite), clears obstacles and
    /// projectiles and resets the obstacle spawn timer. Bonuses survive unless
    /// the tuning says otherwise. Score and weapon selection are kept.
    pub fn restart(&mut self) {
        self.ship = make_ship(&self.bounds, &self.tuning, self.textures.as_ref());
        self.obstacles.clear();
        self.projectiles.clear();
        if self.tuning.clear_bonuses_on_restart {
            self.bonuses.clear();
        }
        self.spawn_timer = 0.0;
        self.redraw_spawn_interval();
        log::info!("Restarted (score so far: {})", self.score);
    }

    pub fn redraw_spawn_interval(&mut self) {
        self.spawn_interval = self
            .rng
            .random_range(self.tuning.spawn_interval_min..=self.tuning.spawn_interval_max);
    }

    /// Spawn one obstacle of the current mode at a random edge
    pub fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        let size = self.spawn_mode.pick(&mut self.rng);
        let obstacle = Obstacle::spawn(id, size, &self.bounds, &mut self.rng);
        log::debug!("Spawned obstacle {} ({:?}) at {:?}", id, size, obstacle.pos());
        self.obstacles.push(obstacle);
    }

    pub fn spawn_bonus(&mut self) {
        let id = self.next_entity_id();
        let bonus = Bonus::spawn(id, &self.bounds, &mut self.rng);
        log::debug!("Spawned bonus {} at {:?}", id, bonus.pos());
        self.bonuses.push(bonus);
    }

    /// Emit one projectile of the current weapon from the ship's nose
    pub fn fire_projectile(&mut self) {
        let id = self.next_entity_id();
        let speed = self.ship.projectile_speed(self.weapon);
        self.projectiles
            .push(Projectile::new(id, self.weapon, self.ship.nose(), speed));
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.ship.is_alive()
    }
}

/// A fresh ship at the center of the play area
///
/// Falls back to a sprite-less ship when the texture cannot be loaded.
fn make_ship(bounds: &Bounds, tuning: &Tuning, textures: Option<&SharedTextures>) -> Ship {
    let sprite = textures.and_then(|backend| match TextureLease::acquire(backend, SHIP_SPRITE_PATH) {
        Ok(lease) => Some(lease),
        Err(e) => {
            log::warn!("Ship sprite unavailable, using fallback radius: {}", e);
            None
        }
    });
    Ship::new(bounds.center(), tuning, sprite)
}
