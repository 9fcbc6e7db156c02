//! Pattern and emitter configuration
//!
//! These types mirror the JSON the external generation service produces.
//! Pattern data is untrusted: numeric fields are clamped and unknown emitter
//! kinds degrade to a harmless default instead of rejecting the pattern.

use serde::{Deserialize, Serialize};

/// Color used when an emitter's hex string fails to parse
pub const DEFAULT_BULLET_COLOR: u32 = 0xFFFFFF;

/// Difficulty rank of a pattern. Ordered by intensity by convention only;
/// nothing in the simulation enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Lunatic,
}

/// Directional algorithm an emitter uses to head its shots.
///
/// `Unknown` absorbs any unrecognized kind string so externally generated
/// patterns never fail to load; it fires a single straight shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitterKind {
    Ring,
    Spiral,
    Spread,
    Aimed,
    Flower,
    Random,
    #[serde(other)]
    Unknown,
}

/// Visual shape of a projectile. `size` stays the collision radius for all of
/// them; shape only affects drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletShape {
    Circle,
    Diamond,
    Star,
    Rect,
}

/// One configured projectile source within a pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitterConfig {
    #[serde(rename = "type")]
    pub kind: EmitterKind,
    /// Frames between shots (the fire period)
    pub frequency: f32,
    /// Projectiles emitted per shot
    pub bullet_count: u32,
    pub speed: f32,
    /// Bounded random addition to speed, uniform in [0, variance)
    #[serde(default)]
    pub speed_variance: f32,
    /// Base heading in degrees
    pub angle_offset: f32,
    /// Degrees added per active frame; drives spin over time
    pub angle_increment: f32,
    /// Hex color, e.g. "#FF00FF"
    pub color: String,
    pub shape: BulletShape,
    /// Radius-equivalent for both drawing and collision
    pub size: f32,
    /// Frames the emitter stays active after its delay; None or 0 = unbounded
    #[serde(default)]
    pub lifetime: Option<u32>,
    /// Frames to wait from run start before becoming active
    #[serde(default)]
    pub delay: Option<u32>,
}

impl EmitterConfig {
    /// Fire period in frames. Clamped to at least 1 so the modulo gate is
    /// always well-defined, whatever the generator sent.
    pub fn period(&self) -> u64 {
        self.frequency.floor().max(1.0) as u64
    }

    pub fn delay(&self) -> u64 {
        self.delay.unwrap_or(0) as u64
    }

    /// Clamp untrusted numeric fields into usable ranges.
    pub fn sanitize(&mut self) {
        self.speed = self.speed.max(0.0);
        self.speed_variance = self.speed_variance.max(0.0);
        self.size = self.size.max(0.0);
    }
}

/// A complete pattern: metadata plus an ordered emitter list. Immutable for
/// the lifetime of one run; swapped wholesale on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub emitters: Vec<EmitterConfig>,
}

impl PatternConfig {
    pub fn sanitize(&mut self) {
        for emitter in &mut self.emitters {
            emitter.sanitize();
        }
    }

    /// Built-in pattern substituted when the external source fails: a single
    /// low-intensity spiral.
    pub fn fallback() -> Self {
        Self {
            name: "Emergency Defense Protocol".to_string(),
            description: "Generator link lost. Running the backup loop barrage.".to_string(),
            difficulty: Difficulty::Normal,
            emitters: vec![EmitterConfig {
                kind: EmitterKind::Spiral,
                frequency: 5.0,
                bullet_count: 2,
                speed: 4.0,
                speed_variance: 0.0,
                angle_offset: 0.0,
                angle_increment: 13.0,
                color: "#00FF00".to_string(),
                shape: BulletShape::Rect,
                size: 4.0,
                lifetime: None,
                delay: None,
            }],
        }
    }
}

/// Parse a "#RRGGBB" hex color into packed 0xRRGGBB.
pub fn parse_hex_color(color: &str) -> Option<u32> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_generator_json() {
        let json = r##"{
            "type": "spread",
            "frequency": 12,
            "bulletCount": 5,
            "speed": 6.5,
            "speedVariance": 1.5,
            "angleOffset": 90,
            "angleIncrement": 0,
            "color": "#FF00FF",
            "shape": "diamond",
            "size": 5,
            "lifetime": 300,
            "delay": 60
        }"##;
        let emitter: EmitterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(emitter.kind, EmitterKind::Spread);
        assert_eq!(emitter.bullet_count, 5);
        assert_eq!(emitter.lifetime, Some(300));
        assert_eq!(emitter.delay, Some(60));
        assert!((emitter.speed_variance - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_decode_defaults_optional_fields() {
        let json = r##"{
            "type": "ring",
            "frequency": 20,
            "bulletCount": 8,
            "speed": 3,
            "angleOffset": 0,
            "angleIncrement": 2,
            "color": "#00FFFF",
            "shape": "circle",
            "size": 4
        }"##;
        let emitter: EmitterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(emitter.speed_variance, 0.0);
        assert_eq!(emitter.lifetime, None);
        assert_eq!(emitter.delay, None);
    }

    #[test]
    fn test_unknown_kind_degrades() {
        let json = r##"{
            "type": "laserwall",
            "frequency": 10,
            "bulletCount": 4,
            "speed": 3,
            "angleOffset": 0,
            "angleIncrement": 0,
            "color": "#FFFFFF",
            "shape": "rect",
            "size": 4
        }"##;
        let emitter: EmitterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(emitter.kind, EmitterKind::Unknown);
    }

    #[test]
    fn test_period_clamps_to_one() {
        let mut emitter = PatternConfig::fallback().emitters[0].clone();
        emitter.frequency = 0.0;
        assert_eq!(emitter.period(), 1);
        emitter.frequency = -3.0;
        assert_eq!(emitter.period(), 1);
        emitter.frequency = 0.9;
        assert_eq!(emitter.period(), 1);
        emitter.frequency = 7.8;
        assert_eq!(emitter.period(), 7);
    }

    #[test]
    fn test_sanitize_clamps_negatives() {
        let mut emitter = PatternConfig::fallback().emitters[0].clone();
        emitter.speed_variance = -2.0;
        emitter.size = -1.0;
        emitter.sanitize();
        assert_eq!(emitter.speed_variance, 0.0);
        assert_eq!(emitter.size, 0.0);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF00FF"), Some(0xFF00FF));
        assert_eq!(parse_hex_color("#39ff14"), Some(0x39FF14));
        assert_eq!(parse_hex_color("FF00FF"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_fallback_is_low_intensity_spiral() {
        let pattern = PatternConfig::fallback();
        assert_eq!(pattern.emitters.len(), 1);
        assert_eq!(pattern.emitters[0].kind, EmitterKind::Spiral);
        assert!(pattern.emitters[0].bullet_count <= 2);
    }
}
