//! Collision resolution
//!
//! The only contact that matters: any projectile overlapping the player's
//! hit-circle ends the run. Contacts are binary, there is no collision
//! response. A small epsilon keeps grazing near-misses survivable.

use glam::Vec2;

use super::state::ProjectilePool;
use crate::consts::HIT_EPSILON;

/// Scan the live projectile set for a terminal hit against the player's
/// hit-circle. Never reports a hit while the player is invincible.
///
/// A projectile hits when its center is strictly closer than
/// `size + hitbox_radius - HIT_EPSILON`; a projectile at exactly the sum of
/// the radii does not count. Short-circuits on the first hit since any
/// single hit is terminal.
pub fn player_hit(
    pool: &ProjectilePool,
    player_pos: Vec2,
    hitbox_radius: f32,
    invincible: bool,
) -> bool {
    if invincible {
        return false;
    }
    pool.iter()
        .any(|p| p.pos.distance(player_pos) < p.size + hitbox_radius - HIT_EPSILON)
}
