//! Run state and core simulation types
//!
//! Everything a run owns lives here: the live projectile population, the
//! player's movement and dash machinery, and the aggregate `GameState` the
//! tick function advances. Single-threaded by design; the tick function is
//! the only mutator between calls.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::pattern::{BulletShape, PatternConfig};
use super::tick::TickInput;
use crate::consts::*;

/// A single moving hazard. Mutated only by [`ProjectilePool::advance`].
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Packed 0xRRGGBB
    pub color: u32,
    pub shape: BulletShape,
    /// Radius for both drawing and collision
    pub size: f32,
    /// Current visual heading in degrees, starts at the travel angle
    pub rotation: f32,
    /// Degrees per frame, fixed at spawn
    pub rotation_speed: f32,
}

/// Dense growable pool of in-flight projectiles.
///
/// Kept as a plain Vec with retain-compaction so the per-tick motion, culling
/// and collision scans stay cache-friendly and allocation-free in steady state.
#[derive(Debug, Default)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn spawn_batch(&mut self, batch: impl IntoIterator<Item = Projectile>) {
        self.projectiles.extend(batch);
    }

    /// Advance one frame of kinematics, then drop everything outside the
    /// playfield plus [`CULL_MARGIN`]. Bounds memory growth for unbounded
    /// emitters.
    pub fn advance(&mut self) {
        for p in &mut self.projectiles {
            p.pos += p.vel;
            p.rotation += p.rotation_speed;
        }
        self.projectiles.retain(|p| {
            p.pos.x > -CULL_MARGIN
                && p.pos.x < FIELD_WIDTH + CULL_MARGIN
                && p.pos.y > -CULL_MARGIN
                && p.pos.y < FIELD_HEIGHT + CULL_MARGIN
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }
}

/// Player position plus the dash state machine.
///
/// The dash timer and cooldown are two independent countdowns. Invincibility
/// is derived as `dash_timer > 0` on every read, never cached across frames.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub pos: Vec2,
    /// Frames of dash remaining; > 0 means dashing and invincible
    pub dash_timer: u32,
    /// Frames until the next dash may trigger
    pub dash_cooldown: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            dash_timer: 0,
            dash_cooldown: 0,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_invincible(&self) -> bool {
        self.dash_timer > 0
    }

    /// Normalized dash readiness for the HUD: 0 right after a dash, 1 when
    /// the cooldown has fully elapsed.
    pub fn dash_readiness(&self) -> f32 {
        (1.0 - self.dash_cooldown as f32 / DASH_COOLDOWN as f32).max(0.0)
    }

    /// Apply one frame of input: dash trigger, countdowns, tiered movement,
    /// and the playfield clamp, in that order.
    pub fn update(&mut self, input: &TickInput) {
        if input.dash && self.dash_cooldown == 0 {
            // Both maxima in the same tick, unconditionally.
            self.dash_timer = DASH_DURATION;
            self.dash_cooldown = DASH_COOLDOWN;
        }

        // Independent countdowns; saturating so neither can go negative.
        self.dash_timer = self.dash_timer.saturating_sub(1);
        self.dash_cooldown = self.dash_cooldown.saturating_sub(1);

        let speed = if self.dash_timer > 0 {
            PLAYER_DASH_SPEED
        } else if input.focus {
            PLAYER_FOCUS_SPEED
        } else {
            PLAYER_SPEED
        };

        let mut dir = Vec2::ZERO;
        if input.up {
            dir.y -= 1.0;
        }
        if input.down {
            dir.y += 1.0;
        }
        if input.left {
            dir.x -= 1.0;
        }
        if input.right {
            dir.x += 1.0;
        }
        // Diagonals must not be faster than axis-aligned movement.
        if dir.x != 0.0 && dir.y != 0.0 {
            dir = dir.normalize();
        }

        self.pos += dir * speed;
        self.pos.x = self.pos.x.clamp(PLAYER_MARGIN, FIELD_WIDTH - PLAYER_MARGIN);
        self.pos.y = self.pos.y.clamp(PLAYER_MARGIN, FIELD_HEIGHT - PLAYER_MARGIN);
    }
}

/// Read-only per-tick snapshot for the renderer and HUD. The projectile list
/// itself is read straight off [`GameState::projectiles`] to avoid copying a
/// large population every frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub frame: u64,
    pub score: u64,
    pub time_survived_secs: u64,
    pub game_over: bool,
    pub projectile_count: usize,
    /// Dash readiness in [0, 1]
    pub dash_cooldown: f32,
    pub player_pos: Vec2,
    pub invincible: bool,
}

/// Complete state of one run.
#[derive(Debug)]
pub struct GameState {
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub(super) pattern: Option<PatternConfig>,
    pub frame: u64,
    pub score: u64,
    pub game_over: bool,
    pub player: PlayerState,
    pub projectiles: ProjectilePool,
}

impl GameState {
    /// Fresh run with no pattern loaded. Nothing fires until a pattern
    /// arrives; the player can still fly around.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            pattern: None,
            frame: 0,
            score: 0,
            game_over: false,
            player: PlayerState::new(),
            projectiles: ProjectilePool::new(),
        }
    }

    pub fn with_pattern(pattern: PatternConfig, seed: u64) -> Self {
        let mut state = Self::new(seed);
        state.load_pattern(pattern);
        state
    }

    pub fn pattern(&self) -> Option<&PatternConfig> {
        self.pattern.as_ref()
    }

    /// Swap in a new pattern and restart. The swap is atomic with the reset:
    /// no projectile or timer from the previous pattern survives into the
    /// new run.
    pub fn load_pattern(&mut self, mut pattern: PatternConfig) {
        pattern.sanitize();
        log::info!(
            "pattern loaded: {} [{:?}] with {} emitters",
            pattern.name,
            pattern.difficulty,
            pattern.emitters.len()
        );
        self.pattern = Some(pattern);
        self.reset();
    }

    /// Restart the current run: frame, score, terminal flag, projectiles and
    /// player state all return to initial values. Equivalent to constructing
    /// a fresh state bound to the same pattern and seed.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.frame = 0;
        self.score = 0;
        self.game_over = false;
        self.player = PlayerState::new();
        self.projectiles.clear();
    }

    pub fn time_survived_secs(&self) -> u64 {
        self.frame / SIM_FPS
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            score: self.score,
            time_survived_secs: self.time_survived_secs(),
            game_over: self.game_over,
            projectile_count: self.projectiles.len(),
            dash_cooldown: self.player.dash_readiness(),
            player_pos: self.player.pos,
            invincible: self.player.is_invincible(),
        }
    }
}
