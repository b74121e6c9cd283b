//! Headless platform with a scripted autopilot
//!
//! Runs a fixed number of fixed-length frames. With the autopilot enabled it
//! plays the game: it dodges nearby obstacles, chases bonuses when it is
//! safe, always holds fire, switches weapons now and then, and restarts
//! after a game over.

use glam::Vec2;

use super::Platform;
use crate::sim::{GameState, MoveInput, TickInput};

/// Obstacles closer than their contact distance plus this margin are dodged
const DANGER_MARGIN: f32 = 150.0;
/// Dead zone so the ship does not jitter around its target
const STEER_DEADZONE: f32 = 8.0;
/// Frames between weapon switches
const WEAPON_SWITCH_FRAMES: u64 = 600;

/// A platform with no window: fixed frame time, frame budget as close signal
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    dt: f32,
    frames_left: u64,
    pub autopilot: bool,
}

impl HeadlessPlatform {
    pub fn new(dt: f32, frames: u64) -> Self {
        Self {
            dt,
            frames_left: frames,
            autopilot: false,
        }
    }

    pub fn with_autopilot(mut self) -> Self {
        self.autopilot = true;
        self
    }
}

impl Platform for HeadlessPlatform {
    fn should_close(&self) -> bool {
        self.frames_left == 0
    }

    fn frame_time(&mut self) -> f32 {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.dt
    }

    fn poll_input(&mut self, view: &GameState) -> TickInput {
        if self.autopilot {
            autopilot(view)
        } else {
            TickInput::default()
        }
    }
}

/// Pick input for the next frame from the current state
pub fn autopilot(state: &GameState) -> TickInput {
    let ship = &state.ship;
    if !ship.is_alive() {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    // Closest obstacle by distance to contact
    let threat = state
        .obstacles
        .iter()
        .map(|o| (o, ship.pos.distance(o.pos()) - o.radius() - ship.radius()))
        .filter(|&(_, gap)| gap < DANGER_MARGIN)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    let target = match threat {
        // Step directly away from the threat
        Some((obstacle, _)) => ship.pos + (ship.pos - obstacle.pos()).normalize_or_zero() * 100.0,
        None => state
            .bonuses
            .iter()
            .map(|b| b.pos())
            .filter(|p| state.bounds.contains(*p))
            .min_by(|a, b| a.distance(ship.pos).total_cmp(&b.distance(ship.pos)))
            // Default station: lower middle, so shots sweep most of the screen
            .unwrap_or(Vec2::new(state.bounds.width * 0.5, state.bounds.height * 0.75)),
    };

    let target = target.clamp(Vec2::ZERO, Vec2::new(state.bounds.width, state.bounds.height));
    let delta = target - ship.pos;

    TickInput {
        movement: MoveInput {
            up: delta.y < -STEER_DEADZONE,
            down: delta.y > STEER_DEADZONE,
            left: delta.x < -STEER_DEADZONE,
            right: delta.x > STEER_DEADZONE,
        },
        fire: true,
        switch_weapon: state.frames > 0 && state.frames % WEAPON_SWITCH_FRAMES == 0,
        ..Default::default()
    }
}
