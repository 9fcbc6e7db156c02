//! Neon Barrage headless driver
//!
//! Runs the simulation without a renderer: loads a pattern from a JSON file
//! given as the first argument (built-in fallback otherwise), flies a
//! scripted ship, and logs the snapshot once per logical second.
//!
//! Usage: neon-barrage [pattern.json] [max_ticks]

use std::env;
use std::fs;

use neon_barrage::consts::SIM_FPS;
use neon_barrage::sim::PatternConfig;
use neon_barrage::source::{PatternError, decode_pattern, resolve};
use neon_barrage::{GameState, TickInput, tick};

/// One minute of logical time by default
const DEFAULT_MAX_TICKS: u64 = 60 * SIM_FPS;
/// Fixed seed so repeated runs of the same pattern replay identically
const SEED: u64 = 0xBA22A6E;
/// Frames of post-mortem drift shown after a terminal hit
const WIND_DOWN_TICKS: u64 = 120;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let pattern = match args.next() {
        Some(path) => resolve(
            fs::read_to_string(&path)
                .map_err(|e| PatternError::Generation(format!("read {path}: {e}")))
                .and_then(|json| decode_pattern(&json)),
        ),
        None => PatternConfig::fallback(),
    };
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);

    let mut state = GameState::with_pattern(pattern, SEED);

    let mut wind_down = WIND_DOWN_TICKS;
    for n in 0..max_ticks {
        let input = scripted_input(n);
        tick(&mut state, &input);

        let snap = state.snapshot();
        if !snap.game_over && snap.frame % SIM_FPS == 0 {
            log::info!(
                "t={:>3}s score={:<6} bullets={:<4} dash={:.0}%",
                snap.time_survived_secs,
                snap.score,
                snap.projectile_count,
                snap.dash_cooldown * 100.0
            );
        }
        if snap.game_over {
            // Let the field drift a little, the way a renderer would show it.
            wind_down -= 1;
            if wind_down == 0 {
                break;
            }
        }
    }

    let snap = state.snapshot();
    let name = state.pattern().map(|p| p.name.as_str()).unwrap_or("none");
    if snap.game_over {
        log::info!(
            "run over: pattern '{}', survived {}s, final score {}",
            name,
            snap.time_survived_secs,
            snap.score
        );
    } else {
        log::info!(
            "run survived the full window: pattern '{}', score {}",
            name,
            snap.score
        );
    }
}

/// Weave around the lower field and dash whenever the cooldown allows.
/// Purely frame-derived so a run is reproducible.
fn scripted_input(tick_index: u64) -> TickInput {
    let phase = (tick_index / 45) % 4;
    TickInput {
        left: phase == 0,
        up: phase == 1,
        right: phase == 2,
        down: phase == 3,
        focus: tick_index % 7 == 0,
        dash: tick_index % 240 == 0,
        ..Default::default()
    }
}
