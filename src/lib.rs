//! Neon Barrage - a procedural danmaku combat simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (emitters, projectiles, player, collisions)
//! - `source`: External pattern-generation seam with built-in fallback
//!
//! The crate simulates only. Rendering, HUD chrome, and raw input capture are
//! external consumers of the per-tick snapshot.

pub mod sim;
pub mod source;

pub use sim::{GameState, PatternConfig, Snapshot, TickInput, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions, shared with the renderer
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Emission origin for all emitters (the boss anchor, top-center)
    pub const BOSS_POS: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 4.0);

    /// Player movement speeds (units per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_FOCUS_SPEED: f32 = 2.5;
    pub const PLAYER_DASH_SPEED: f32 = 12.0;

    /// Dash timing (frames)
    pub const DASH_DURATION: u32 = 15;
    pub const DASH_COOLDOWN: u32 = 120;

    /// The kill zone is deliberately smaller than the rendered sprite
    pub const PLAYER_HITBOX_RADIUS: f32 = 3.0;
    pub const PLAYER_VISUAL_RADIUS: f32 = 8.0;

    pub const PLAYER_START: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - 100.0);

    /// Inset keeping the player inside the visible field
    pub const PLAYER_MARGIN: f32 = 10.0;
    /// Outset beyond which projectiles are culled
    pub const CULL_MARGIN: f32 = 50.0;

    /// Forgiveness margin so grazing near-misses never register as hits
    pub const HIT_EPSILON: f32 = 1.0;

    /// Score accrued per running frame
    pub const SCORE_PER_FRAME: u64 = 10;
    /// Logical frame rate used to derive survived seconds
    pub const SIM_FPS: u64 = 60;
}

/// Unit vector for a heading in degrees (screen coordinates, y grows downward)
#[inline]
pub fn heading_to_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Heading in degrees from `from` toward `to`
#[inline]
pub fn heading_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}
