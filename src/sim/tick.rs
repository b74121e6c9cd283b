//! Per-frame simulation step
//!
//! Advances the game by one variable-length frame. The order of the stages
//! matters: the ship moves before anything spawns, projectiles move before
//! they are tested against obstacles, and obstacles only move if they did not
//! ram the ship.

use rand::Rng;

use super::collision::{resolve_bonuses, resolve_obstacles, resolve_projectile_hits};
use super::obstacle::{SizeClass, SpawnMode};
use super::state::GameState;
use crate::sim::ship::MoveInput;

/// Input for a single frame
///
/// Held keys are levels; `restart`, `switch_weapon` and `size_keys` are
/// edge-triggered (true only on the frame the key went down).
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub movement: MoveInput,
    pub fire: bool,
    pub restart: bool,
    pub switch_weapon: bool,
    /// Size-mode keys 1..=5: small, medium, large, random, very large
    pub size_keys: [bool; 5],
}

/// What happened during a frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub shots_fired: u32,
    pub obstacles_spawned: u32,
    pub obstacles_destroyed: Vec<SizeClass>,
    pub obstacles_rammed: u32,
    pub obstacles_expired: u32,
    pub projectiles_expired: u32,
    pub bonuses_spawned: u32,
    pub bonuses_collected: u32,
    pub score_gained: u64,
    pub restarted: bool,
    /// The ship died during this frame
    pub ship_died: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    state.spawn_timer += dt;

    state.ship.advance(dt, &input.movement);

    if input.restart && !state.ship.is_alive() {
        state.restart();
        report.restarted = true;
    }
    let was_alive = state.ship.is_alive();

    apply_toggles(state, input);
    report.shots_fired = fire(state, input.fire, dt);
    spawn(state, dt, &mut report);

    let bounds = state.bounds;
    let before = state.projectiles.len();
    state.projectiles.retain_mut(|p| !p.advance(dt, &bounds));
    report.projectiles_expired = (before - state.projectiles.len()) as u32;

    let hits = resolve_projectile_hits(&mut state.projectiles, &mut state.obstacles);
    state.score += hits.score;
    report.score_gained = hits.score;
    report.obstacles_destroyed = hits.destroyed;

    let obstacles = resolve_obstacles(&mut state.ship, &mut state.obstacles, dt, &bounds);
    report.obstacles_rammed = obstacles.rammed;
    report.obstacles_expired = obstacles.expired;

    let bonuses = resolve_bonuses(&mut state.ship, &mut state.bonuses, dt, &bounds);
    report.bonuses_collected = bonuses.collected;

    if was_alive && !state.ship.is_alive() {
        report.ship_died = true;
        log::info!("Game over - final score {}", state.score);
    }

    state.time += f64::from(dt);
    state.frames += 1;
    log::trace!(
        "frame {}: {} obstacles, {} projectiles, {} bonuses",
        state.frames,
        state.obstacles.len(),
        state.projectiles.len(),
        state.bonuses.len()
    );
    report
}

/// Size-mode and weapon switches; later size keys win when several are pressed
fn apply_toggles(state: &mut GameState, input: &TickInput) {
    for (index, _) in input.size_keys.iter().enumerate().filter(|(_, pressed)| **pressed) {
        if let Some(mode) = SpawnMode::from_key(index) {
            state.spawn_mode = mode;
            log::debug!("Spawn mode: {:?}", mode);
        }
    }
    if input.switch_weapon {
        state.weapon = state.weapon.next();
        log::debug!("Weapon: {}", state.weapon.name());
    }
}

/// Fire-control accumulator; returns the number of shots emitted
///
/// While the trigger is held, every whole fire interval banked in the timer
/// becomes one shot, so a long frame catches up with several shots. While it
/// is released the bank is trimmed to less than one interval so resuming fire
/// cannot burst.
fn fire(state: &mut GameState, trigger: bool, dt: f32) -> u32 {
    let rate = state.ship.fire_rate(state.weapon);
    let interval = 1.0 / rate;

    if !(trigger && state.ship.is_alive()) {
        if state.fire_timer > interval {
            state.fire_timer %= interval;
        }
        return 0;
    }

    state.fire_timer += dt;
    // Same as subtracting the interval once per shot, without the per-step
    // rounding drift of repeated f32 subtraction.
    let shots = (state.fire_timer * rate).floor().max(0.0) as u32;
    for _ in 0..shots {
        state.fire_projectile();
    }
    state.fire_timer = (state.fire_timer - shots as f32 / rate).max(0.0);
    shots
}

/// Obstacle and bonus spawning
fn spawn(state: &mut GameState, dt: f32, report: &mut TickReport) {
    if state.spawn_timer >= state.spawn_interval
        && state.obstacles.len() < state.tuning.obstacle_cap
    {
        state.spawn_obstacle();
        state.spawn_timer = 0.0;
        state.redraw_spawn_interval();
        report.obstacles_spawned += 1;
    }

    state.bonus_timer += dt;
    if state.bonus_timer >= state.tuning.bonus_interval {
        if state.rng.random_bool(state.tuning.bonus_chance) {
            state.spawn_bonus();
            report.bonuses_spawned += 1;
        }
        state.bonus_timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::Tuning;
    use crate::sim::bonus::Bonus;
    use crate::sim::geometry::Body;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::projectile::WeaponKind;

    /// A state where nothing spawns on its own
    fn quiet_state() -> GameState {
        let tuning = Tuning {
            spawn_interval_min: 1.0e6,
            spawn_interval_max: 1.0e6,
            bonus_interval: 1.0e6,
            ..Default::default()
        };
        GameState::new(12345, tuning)
    }

    fn holding_fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_second_of_laser_fire() {
        let mut state = quiet_state();
        let report = tick(&mut state, &holding_fire(), 1.0);
        assert_eq!(report.shots_fired, 18);
        assert!(state.fire_timer < 1.0 / 18.0);
        // Shots that already left the screen are not counted as live
        assert_eq!(state.projectiles.len() as u32 + report.projectiles_expired, 18);
    }

    #[test]
    fn test_fire_accumulates_across_frames() {
        let mut state = quiet_state();
        state.weapon = WeaponKind::Bullet;
        let mut shots = 0;
        for _ in 0..60 {
            shots += tick(&mut state, &holding_fire(), 1.0 / 60.0).shots_fired;
        }
        // 22 shots/s over one second, allowing for the accumulator straddling the boundary
        assert!((21..=22).contains(&shots), "fired {}", shots);
    }

    #[test]
    fn test_released_trigger_trims_bank() {
        let mut state = quiet_state();
        state.fire_timer = 0.5;
        let report = tick(&mut state, &TickInput::default(), 0.016);
        assert_eq!(report.shots_fired, 0);
        assert!(state.fire_timer <= 1.0 / 18.0);

        // Resuming fire cannot burst more than one banked shot plus the new frame
        let report = tick(&mut state, &holding_fire(), 0.0);
        assert!(report.shots_fired <= 1);
    }

    #[test]
    fn test_dead_ship_does_not_fire() {
        let mut state = quiet_state();
        state.ship.apply_damage(100);
        let report = tick(&mut state, &holding_fire(), 1.0);
        assert_eq!(report.shots_fired, 0);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_projectiles_spawn_at_nose() {
        let mut state = quiet_state();
        let nose = state.ship.nose();
        tick(&mut state, &holding_fire(), 1.0 / 18.0 + 1.0e-4);
        assert_eq!(state.projectiles.len(), 1);
        let p = &state.projectiles[0];
        assert_eq!(p.kind, WeaponKind::Laser);
        // Projectile already moved one frame upward from the nose
        assert_eq!(p.pos().x, nose.x);
        assert!(p.pos().y < nose.y);
    }

    #[test]
    fn test_weapon_and_size_toggles() {
        let mut state = quiet_state();
        let input = TickInput {
            switch_weapon: true,
            size_keys: [false, true, false, false, false],
            ..Default::default()
        };
        tick(&mut state, &input, 0.016);
        assert_eq!(state.weapon, WeaponKind::Bullet);
        assert_eq!(state.spawn_mode, SpawnMode::Fixed(SizeClass::Medium));

        let input = TickInput {
            size_keys: [true, false, false, true, true],
            ..Default::default()
        };
        tick(&mut state, &input, 0.016);
        assert_eq!(state.spawn_mode, SpawnMode::Fixed(SizeClass::VeryLarge));
    }

    #[test]
    fn test_obstacle_spawn_timer_and_cap() {
        let tuning = Tuning {
            spawn_interval_min: 0.5,
            spawn_interval_max: 0.5,
            bonus_interval: 1.0e6,
            obstacle_cap: 2,
            ..Default::default()
        };
        let mut state = GameState::new(1, tuning);
        state.spawn_mode = SpawnMode::Fixed(SizeClass::Small);

        assert_eq!(tick(&mut state, &TickInput::default(), 0.4).obstacles_spawned, 0);
        assert_eq!(tick(&mut state, &TickInput::default(), 0.1).obstacles_spawned, 1);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(tick(&mut state, &TickInput::default(), 0.5).obstacles_spawned, 1);
        assert_eq!(state.obstacles.len(), 2);

        // At the cap the timer keeps running but nothing spawns
        assert_eq!(tick(&mut state, &TickInput::default(), 0.5).obstacles_spawned, 0);
        assert!(state.spawn_timer >= 0.5);
        assert!(state.obstacles.iter().all(|o| o.size == SizeClass::Small));
    }

    #[test]
    fn test_bonus_timer_resets_on_every_attempt() {
        let tuning = Tuning {
            spawn_interval_min: 1.0e6,
            spawn_interval_max: 1.0e6,
            bonus_chance: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(1, tuning);
        let report = tick(&mut state, &TickInput::default(), 5.0);
        assert_eq!(report.bonuses_spawned, 0);
        assert_eq!(state.bonus_timer, 0.0);

        state.tuning.bonus_chance = 1.0;
        tick(&mut state, &TickInput::default(), 4.9);
        assert!(state.bonuses.is_empty());
        let report = tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(report.bonuses_spawned, 1);
        assert_eq!(state.bonus_timer, 0.0);
    }

    #[test]
    fn test_medium_obstacle_five_bullets() {
        let mut state = quiet_state();
        let target = Vec2::new(800.0, 200.0);
        state
            .obstacles
            .push(Obstacle::new(99, SizeClass::Medium, Body::at(target)));

        for i in 0..5 {
            state.projectiles.push(crate::sim::projectile::Projectile::new(
                100 + i,
                WeaponKind::Bullet,
                target,
                0.0,
            ));
            let report = tick(&mut state, &TickInput::default(), 0.0);
            if i < 4 {
                assert_eq!(state.obstacles[0].hp, 50 - 10 * (i as i32 + 1));
                assert_eq!(report.score_gained, 0);
            } else {
                assert!(state.obstacles.is_empty());
                assert_eq!(report.score_gained, 4);
                assert_eq!(report.obstacles_destroyed, vec![SizeClass::Medium]);
            }
        }
        assert_eq!(state.score, 4);
    }

    #[test]
    fn test_ramming_kills_ship_without_score() {
        let mut state = quiet_state();
        let center = state.ship.pos;
        for id in 0..2 {
            state
                .obstacles
                .push(Obstacle::new(id, SizeClass::VeryLarge, Body::at(center)));
        }
        let report = tick(&mut state, &TickInput::default(), 0.016);
        assert_eq!(report.obstacles_rammed, 2);
        assert!(report.ship_died);
        assert!(state.is_game_over());
        assert_eq!(state.ship.reported_health(), 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_bonus_pickup_scenario() {
        let mut state = quiet_state();
        state.ship.apply_damage(50);
        let pos = state.ship.pos;
        state.bonuses.push(Bonus::new(7, pos, Vec2::ZERO));

        let report = tick(&mut state, &TickInput::default(), 0.016);
        assert_eq!(report.bonuses_collected, 1);
        assert_eq!(state.ship.reported_health(), 60);
        assert!(state.bonuses.is_empty());
    }

    #[test]
    fn test_restart_only_when_dead() {
        let mut state = quiet_state();
        state.spawn_obstacle();
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let report = tick(&mut state, &restart, 0.0);
        assert!(!report.restarted);
        assert_eq!(state.obstacles.len(), 1);

        state.ship.apply_damage(1000);
        state.fire_projectile();
        state.bonuses.push(Bonus::new(50, Vec2::new(100.0, 100.0), Vec2::ZERO));
        state.score = 42;

        let report = tick(&mut state, &restart, 0.0);
        assert!(report.restarted);
        assert!(state.ship.is_alive());
        assert_eq!(state.ship.reported_health(), 100);
        assert!(state.obstacles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.bonuses.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.score, 42);
    }

    #[test]
    fn test_restart_can_clear_bonuses() {
        let mut state = quiet_state();
        state.tuning.clear_bonuses_on_restart = true;
        state.ship.apply_damage(1000);
        state.bonuses.push(Bonus::new(50, Vec2::new(100.0, 100.0), Vec2::ZERO));
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            0.0,
        );
        assert!(state.bonuses.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());
        let input = holding_fire();

        for _ in 0..600 {
            tick(&mut state1, &input, 1.0 / 60.0);
            tick(&mut state2, &input, 1.0 / 60.0);
        }

        assert_eq!(state1.frames, 600);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.obstacles.len(), state2.obstacles.len());
        assert_eq!(state1.bonuses.len(), state2.bonuses.len());
        assert!(state1.obstacles.iter().zip(&state2.obstacles).all(|(a, b)| a.pos() == b.pos()));
    }
}
