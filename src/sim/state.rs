//! Game state and core simulation types
//!
//! Everything the live session owns lives here: the falling letters, the
//! score/level counters, the danger boundary and the seeded RNG.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Not yet started, no schedules active
    Idle,
    /// Spawner and tick engine active, input accepted
    Running,
    /// Boundary reached the top threshold; schedules halted, input ignored
    GameOver,
}

/// A letter falling through the play-field
#[derive(Debug, Clone)]
pub struct FallingLetter {
    pub id: u32,
    /// Uppercase glyph from the configured alphabet
    pub ch: char,
    /// Position in percent: x across the width, y down from the top.
    /// y starts negative (above the visible edge) and only increases.
    pub pos: Vec2,
}

/// Transient visual marker left where a letter was destroyed.
/// Cosmetic only; never affects gameplay.
#[derive(Debug, Clone)]
pub struct PopEffect {
    pub id: u32,
    pub ch: char,
    pub pos: Vec2,
    /// Remaining lifetime; the marker is dropped when this hits zero
    pub ttl_ticks: u32,
}

/// Observable things that happened during a tick or key press
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A matching letter was destroyed by input
    LetterPopped { id: u32, ch: char, pos: Vec2 },
    /// At least one letter landed this tick and the boundary grew once
    BoundaryGrew { height: f32 },
    /// Score crossed an exact level-up multiple
    LevelUp { level: u32 },
    /// The boundary reached the terminal threshold. Emitted exactly once
    /// per session, at the tick where the threshold is first reached.
    GameOver { score: u64 },
}

/// Authoritative per-session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn randomness
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated score
    pub score: u64,
    /// Difficulty tier, starts at 1
    pub level: u32,
    /// Danger-zone height in percent, grows from the bottom
    pub boundary_height: f32,
    /// Live falling letters
    pub letters: Vec<FallingLetter>,
    /// Expiring pop markers (not gameplay-relevant)
    pub pops: Vec<PopEffect>,
    /// Frame tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh idle state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            boundary_height: 0.0,
            letters: Vec::new(),
            pops: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The vertical position of the boundary line; letters at or past it
    /// have landed
    pub fn boundary_line(&self, config: &GameConfig) -> f32 {
        config.game_height - self.boundary_height
    }

    /// Spawn one falling letter: uniformly random glyph from the alphabet,
    /// uniformly random x inside the safe inset, y just above the top edge.
    ///
    /// Failure-free: an empty alphabet spawns nothing, and the x position is
    /// clamped into the inset regardless of what the RNG hands back.
    pub fn spawn_letter(&mut self, config: &GameConfig) {
        if self.phase != GamePhase::Running || config.alphabet.is_empty() {
            return;
        }

        let ch = config.alphabet[self.rng.random_range(0..config.alphabet.len())];
        let max_x = config.game_width - config.spawn_inset;
        let x = self
            .rng
            .random_range(config.spawn_inset..=max_x)
            .clamp(config.spawn_inset, max_x);

        let id = self.next_entity_id();
        self.letters.push(FallingLetter {
            id,
            ch,
            pos: Vec2::new(x, config.spawn_start_y),
        });
    }
}
