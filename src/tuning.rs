//! Data-driven game balance
//!
//! Every field has a default matching the shipped game, so a tuning file only
//! needs to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Fire cadence for one weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Shots per second while the trigger is held
    pub fire_rate: f32,
    /// Pixel gap between consecutive projectiles (speed = spacing * fire_rate)
    pub spacing: f32,
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Maximum live obstacles; spawning pauses at the cap
    pub obstacle_cap: usize,
    /// Obstacle spawn interval range (seconds), redrawn after every spawn
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,
    /// Seconds between bonus spawn attempts
    pub bonus_interval: f32,
    /// Probability that a bonus attempt actually spawns one
    pub bonus_chance: f64,
    /// Ship radius used when no sprite is available
    pub ship_fallback_radius: f32,
    pub laser: WeaponProfile,
    pub bullet: WeaponProfile,
    /// Whether a restart also removes live bonuses
    pub clear_bonuses_on_restart: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            obstacle_cap: 150,
            spawn_interval_min: 0.5,
            spawn_interval_max: 3.0,
            bonus_interval: 5.0,
            bonus_chance: 0.5,
            ship_fallback_radius: 24.0,
            laser: WeaponProfile {
                fire_rate: 18.0,
                spacing: 40.0,
            },
            bullet: WeaponProfile {
                fire_rate: 22.0,
                spacing: 20.0,
            },
            clear_bonuses_on_restart: false,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for dumping the effective tuning)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.spawn_interval_min > 0.0 && self.spawn_interval_min <= self.spawn_interval_max) {
            return Err(TuningError::Invalid {
                field: "spawn_interval_min",
                reason: format!(
                    "need 0 < min <= max, got {}..{}",
                    self.spawn_interval_min, self.spawn_interval_max
                ),
            });
        }
        if self.bonus_interval <= 0.0 {
            return Err(TuningError::Invalid {
                field: "bonus_interval",
                reason: format!("must be positive, got {}", self.bonus_interval),
            });
        }
        if !(0.0..=1.0).contains(&self.bonus_chance) {
            return Err(TuningError::Invalid {
                field: "bonus_chance",
                reason: format!("must be within 0..=1, got {}", self.bonus_chance),
            });
        }
        for (field, profile) in [("laser", self.laser), ("bullet", self.bullet)] {
            if profile.fire_rate <= 0.0 || profile.spacing <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!(
                        "fire_rate and spacing must be positive, got {} / {}",
                        profile.fire_rate, profile.spacing
                    ),
                });
            }
        }
        Ok(())
    }
}
