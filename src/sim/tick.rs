//! Fixed-step simulation tick
//!
//! One tick runs to completion before the next is scheduled: player, then
//! emitters, then projectile motion, then collision, then the snapshot is
//! ready. The engine counts logical frames, never wall-clock time, so
//! pattern timing is deterministic whatever the render framerate does.

use super::collision;
use super::emitter;
use super::state::GameState;
use crate::consts::{PLAYER_HITBOX_RADIUS, SCORE_PER_FRAME};

/// Input state sampled once per tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Focus modifier: slower, precise movement
    pub focus: bool,
    /// Dash trigger; a dash starts only when the cooldown has elapsed
    pub dash: bool,
    /// Freezes the world without ending the run
    pub paused: bool,
}

/// Advance the simulation by one frame.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Player movement and dash run whenever the run is alive, even while
    // paused, so the ship can reposition between pattern swaps.
    if !state.game_over {
        state.player.update(input);
    }
    let invincible = state.player.is_invincible();

    let running = !input.paused && !state.game_over && state.pattern().is_some();

    // Emitters fire and the clock advances only while running. Each emitter
    // is re-synchronized from its own delay, not the global clock.
    if running {
        let player_pos = state.player.pos;
        let frame = state.frame;
        if let Some(pattern) = &state.pattern {
            for emitter_cfg in &pattern.emitters {
                let batch = emitter::evaluate(emitter_cfg, frame, player_pos, &mut state.rng);
                state.projectiles.spawn_batch(batch);
            }
        }
        state.frame += 1;
        state.score += SCORE_PER_FRAME;
    }

    // Projectile motion continues after game over for visual continuity;
    // only an explicit pause freezes it.
    if !input.paused {
        state.projectiles.advance();
    }

    // First confirmed hit while vulnerable latches the terminal state and
    // freezes the score. Nothing past this point is ever re-checked.
    if running
        && collision::player_hit(
            &state.projectiles,
            state.player.pos,
            PLAYER_HITBOX_RADIUS,
            invincible,
        )
    {
        state.game_over = true;
        log::info!(
            "terminal hit at frame {}, final score {}",
            state.frame,
            state.score
        );
    }
}
