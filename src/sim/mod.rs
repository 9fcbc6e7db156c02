//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical frames only, never wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod emitter;
pub mod pattern;
pub mod state;
pub mod tick;

pub use collision::player_hit;
pub use pattern::{BulletShape, Difficulty, EmitterConfig, EmitterKind, PatternConfig};
pub use state::{GameState, PlayerState, Projectile, ProjectilePool, Snapshot};
pub use tick::{TickInput, tick};
