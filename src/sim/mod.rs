//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep driven by the platform's frame time
//! - Seeded RNG only, owned by the game state
//! - Stable iteration order (collection order) for collision scans
//! - No rendering or platform dependencies

pub mod bonus;
pub mod collision;
pub mod geometry;
pub mod obstacle;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use bonus::Bonus;
pub use collision::{BonusSummary, HitSummary, ObstacleSummary, first_hit};
pub use geometry::{Body, Bounds};
pub use obstacle::{Obstacle, SizeClass, SpawnMode};
pub use projectile::{Projectile, WeaponKind};
pub use ship::{MoveInput, Ship};
pub use state::GameState;
pub use tick::{TickInput, TickReport, tick};
