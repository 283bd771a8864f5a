//! Letterfall - a falling-letters typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, scoring, boundary)
//! - `session`: Phase machine and frame/spawn scheduling around the sim
//! - `config`: Data-driven game tuning

pub mod config;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use session::GameSession;

/// Game tuning constants (reference configuration)
pub mod consts {
    /// Letters the game can spawn, uppercase Turkish alphabet
    pub const ALPHABET: &str = "ABCÇDEFGĞHIİJKLMNOÖPRSŞTUÜVYZ";

    /// Play-field extent, both axes in percent
    pub const GAME_WIDTH: f32 = 100.0;
    pub const GAME_HEIGHT: f32 = 100.0;

    /// Fall speed at level 1, percent of height per frame
    pub const INITIAL_FALL_SPEED: f32 = 0.2;
    /// Fall speed gained per level
    pub const SPEED_INCREMENT_PER_LEVEL: f32 = 0.05;

    /// Spawn interval at level 1, milliseconds
    pub const INITIAL_SPAWN_MS: f32 = 2000.0;
    /// Spawn interval lost per level
    pub const SPAWN_MS_DECREMENT_PER_LEVEL: f32 = 100.0;
    /// Spawn interval floor
    pub const MIN_SPAWN_MS: f32 = 500.0;

    /// Danger-zone growth per crossing tick, percent of height
    pub const BOUNDARY_INCREMENT: f32 = 5.0;
    /// Reserved margin at the top; the game ends once the boundary
    /// reaches GAME_HEIGHT - TOP_MARGIN
    pub const TOP_MARGIN: f32 = 20.0;

    /// Score awarded per destroyed letter
    pub const SCORE_PER_LETTER: u64 = 10;
    /// Level up on exact multiples of this score
    pub const LEVEL_UP_SCORE: u64 = 100;

    /// Horizontal safe inset so glyphs are never clipped, percent of width
    pub const SPAWN_INSET: f32 = 5.0;
    /// Letters spawn just above the visible area
    pub const SPAWN_START_Y: f32 = -5.0;

    /// Pop marker lifetime in ticks (~0.5s at 60 fps)
    pub const POP_TTL_TICKS: u32 = 30;
}
