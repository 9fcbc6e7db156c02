//! External pattern source seam
//!
//! Pattern generation lives outside the simulation: some service turns a
//! free-text theme into a `PatternConfig`, usually over the network, and the
//! engine only ever sees the resolved result. Generation can fail; the run
//! must not. Any failure resolves to the built-in fallback pattern with a
//! warning, never a crash.
//!
//! Generator JSON is expected to stay within these ranges: frequency 5-60,
//! bulletCount 1-50, speed 2-10, speedVariance 0-2, size 3-10. Values
//! outside them are clamped or tolerated rather than rejected.

use thiserror::Error;

use crate::sim::PatternConfig;

/// Theme used when the player has not typed one
pub const DEFAULT_THEME: &str = "cyberpunk neon rain";

#[derive(Debug, Error)]
pub enum PatternError {
    /// The generation service itself failed (network, quota, refusal)
    #[error("pattern generation failed: {0}")]
    Generation(String),
    /// The service answered with a payload that is not a valid pattern
    #[error("pattern payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A provider of patterns for a theme. Implementations wrap whatever
/// transport the generation service uses; the simulation only consumes the
/// resolved config.
pub trait PatternSource {
    fn generate(&self, theme: &str) -> Result<PatternConfig, PatternError>;
}

/// Decode and sanitize a generator JSON payload.
pub fn decode_pattern(json: &str) -> Result<PatternConfig, PatternError> {
    let mut pattern: PatternConfig = serde_json::from_str(json)?;
    pattern.sanitize();
    Ok(pattern)
}

/// Resolve a generation attempt into a pattern the engine can always load.
pub fn resolve(result: Result<PatternConfig, PatternError>) -> PatternConfig {
    match result {
        Ok(pattern) => pattern,
        Err(err) => {
            log::warn!("pattern source failed ({err}); using built-in fallback");
            PatternConfig::fallback()
        }
    }
}

/// Source that always yields the same pattern. Used by the headless driver
/// and tests; a real deployment wires the generation client in here instead.
pub struct StaticSource(pub PatternConfig);

impl PatternSource for StaticSource {
    fn generate(&self, _theme: &str) -> Result<PatternConfig, PatternError> {
        Ok(self.0.clone())
    }
}
