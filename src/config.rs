//! Game tuning configuration
//!
//! Every numeric knob the sim consumes lives here, supplied as static
//! configuration rather than derived at runtime. Defaults match the
//! reference tuning in [`crate::consts`]; on wasm a JSON override can be
//! loaded from LocalStorage so balance can be adjusted without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Static game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Characters the spawner draws from, stored uppercase
    pub alphabet: Vec<char>,

    // === Play-field ===
    /// Field width in percent (horizontal positions live in [0, width])
    pub game_width: f32,
    /// Field height in percent (vertical positions live in [0, height])
    pub game_height: f32,
    /// Horizontal inset keeping spawned glyphs clear of the edges
    pub spawn_inset: f32,
    /// Vertical start position, just above the visible top edge
    pub spawn_start_y: f32,

    // === Difficulty ===
    /// Fall speed at level 1, percent of height per frame
    pub initial_fall_speed: f32,
    /// Fall speed gained per level
    pub speed_increment_per_level: f32,
    /// Spawn interval at level 1, milliseconds
    pub initial_spawn_ms: f32,
    /// Spawn interval lost per level
    pub spawn_ms_decrement_per_level: f32,
    /// Spawn interval never drops below this
    pub min_spawn_ms: f32,

    // === Boundary ===
    /// Danger-zone growth per crossing tick
    pub boundary_increment: f32,
    /// Margin reserved at the top; boundary reaching
    /// `game_height - top_margin` ends the game
    pub top_margin: f32,

    // === Scoring ===
    /// Reward per destroyed letter
    pub score_per_letter: u64,
    /// Level up on exact multiples of this score
    pub level_up_score: u64,

    // === Cosmetics ===
    /// Pop marker lifetime in ticks
    pub pop_ttl_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: consts::ALPHABET.chars().collect(),
            game_width: consts::GAME_WIDTH,
            game_height: consts::GAME_HEIGHT,
            spawn_inset: consts::SPAWN_INSET,
            spawn_start_y: consts::SPAWN_START_Y,
            initial_fall_speed: consts::INITIAL_FALL_SPEED,
            speed_increment_per_level: consts::SPEED_INCREMENT_PER_LEVEL,
            initial_spawn_ms: consts::INITIAL_SPAWN_MS,
            spawn_ms_decrement_per_level: consts::SPAWN_MS_DECREMENT_PER_LEVEL,
            min_spawn_ms: consts::MIN_SPAWN_MS,
            boundary_increment: consts::BOUNDARY_INCREMENT,
            top_margin: consts::TOP_MARGIN,
            score_per_letter: consts::SCORE_PER_LETTER,
            level_up_score: consts::LEVEL_UP_SCORE,
            pop_ttl_ticks: consts::POP_TTL_TICKS,
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "letterfall_config";

    /// The boundary height at which the session becomes terminal
    pub fn game_over_boundary(&self) -> f32 {
        self.game_height - self.top_margin
    }

    /// Parse a JSON override; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load config overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config overrides from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring bad config override: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.alphabet.len(), 29);
        assert_eq!(config.score_per_letter, 10);
        assert_eq!(config.level_up_score, 100);
        assert!((config.game_over_boundary() - 80.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_override_partial() {
        let config = GameConfig::from_json(r#"{"initial_spawn_ms": 1500.0}"#).unwrap();
        assert!((config.initial_spawn_ms - 1500.0).abs() < f32::EPSILON);
        // Everything else stays at the defaults
        assert!((config.initial_fall_speed - 0.2).abs() < f32::EPSILON);
    }
}
