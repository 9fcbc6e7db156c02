//! Emitter evaluation
//!
//! Pure function of (emitter config, frame index, player position, RNG):
//! decides whether an emitter fires this frame and produces the batch of
//! newly spawned projectiles if so. No internal mutable state.

use glam::Vec2;
use rand::Rng;

use super::pattern::{DEFAULT_BULLET_COLOR, EmitterConfig, EmitterKind, parse_hex_color};
use super::state::Projectile;
use crate::consts::BOSS_POS;
use crate::{heading_between, heading_to_vec};

/// Angular width of the spread fan in degrees
const SPREAD_ARC: f32 = 60.0;
/// Per-shot aim jitter window in degrees (total, centered on the player)
const AIM_JITTER: f32 = 30.0;
/// Oscillation applied on top of the ring formula for flower emitters
const FLOWER_WOBBLE_RATE: f32 = 0.05;
const FLOWER_WOBBLE_DEGREES: f32 = 20.0;

/// Frames elapsed since the emitter became active, or None while it is
/// delayed or expired.
fn active_frame(emitter: &EmitterConfig, frame: u64) -> Option<u64> {
    let delay = emitter.delay();
    if frame < delay {
        return None;
    }
    let active = frame - delay;
    match emitter.lifetime {
        Some(lifetime) if lifetime > 0 && active > lifetime as u64 => None,
        _ => Some(active),
    }
}

/// Evaluate one emitter for one frame. Returns the projectiles spawned this
/// frame, empty unless the frame lands on the emitter's fire period.
pub fn evaluate(
    emitter: &EmitterConfig,
    frame: u64,
    player_pos: Vec2,
    rng: &mut impl Rng,
) -> Vec<Projectile> {
    let Some(active) = active_frame(emitter, frame) else {
        return Vec::new();
    };
    if active % emitter.period() != 0 {
        return Vec::new();
    }

    let count = emitter.bullet_count;
    let base_angle = emitter.angle_offset + emitter.angle_increment * active as f32;
    let color = parse_hex_color(&emitter.color).unwrap_or(DEFAULT_BULLET_COLOR);

    // Unrecognized kinds degrade to a single straight shot instead of failing:
    // generated pattern data must never take the run down.
    let shots = match emitter.kind {
        EmitterKind::Unknown => 1,
        _ => count,
    };

    let mut spawned = Vec::with_capacity(shots as usize);
    for i in 0..shots {
        let angle = match emitter.kind {
            // Ring and spiral intentionally share one formula; a spiral is a
            // ring whose angle_increment walks the arms over time.
            EmitterKind::Ring | EmitterKind::Spiral => {
                base_angle + (360.0 / count as f32) * i as f32
            }
            EmitterKind::Flower => {
                base_angle
                    + (360.0 / count as f32) * i as f32
                    + (active as f32 * FLOWER_WOBBLE_RATE).sin() * FLOWER_WOBBLE_DEGREES
            }
            EmitterKind::Spread => {
                if count <= 1 {
                    base_angle
                } else {
                    base_angle - SPREAD_ARC / 2.0 + (SPREAD_ARC / (count - 1) as f32) * i as f32
                }
            }
            EmitterKind::Aimed => {
                heading_between(BOSS_POS, player_pos)
                    + rng.random_range(-AIM_JITTER / 2.0..AIM_JITTER / 2.0)
            }
            EmitterKind::Random => rng.random_range(0.0..360.0),
            EmitterKind::Unknown => base_angle,
        };

        let speed = if emitter.speed_variance > 0.0 {
            emitter.speed + rng.random_range(0.0..emitter.speed_variance)
        } else {
            emitter.speed
        };

        spawned.push(Projectile {
            pos: BOSS_POS,
            vel: heading_to_vec(angle) * speed,
            color,
            shape: emitter.shape,
            size: emitter.size,
            rotation: angle,
            rotation_speed: rng.random_range(-5.0..5.0),
        });
    }
    spawned
}
