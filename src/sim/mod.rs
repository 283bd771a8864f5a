//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-paced ticks only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod input;
pub mod state;
pub mod tick;

pub use difficulty::{fall_speed, spawn_interval_ms};
pub use input::{key_press, normalize_key};
pub use state::{FallingLetter, GameEvent, GamePhase, GameState, PopEffect};
pub use tick::tick;
