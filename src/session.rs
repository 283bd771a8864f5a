//! Session orchestration
//!
//! Wraps the sim in the idle -> running -> terminal phase machine and owns
//! the scheduling glue: the host pumps `frame` once per display refresh, and
//! the session runs the tick engine plus an elapsed-time spawn accumulator
//! against the shared state. Key events arrive through `key_press`. All
//! activations run to completion on one logical thread, so every tick or
//! input is fully applied before the next is considered.

use crate::config::GameConfig;
use crate::sim::{self, GameEvent, GamePhase, GameState};

/// Callback invoked exactly once per session with the final score
pub type GameOverHandler = Box<dyn FnMut(u64)>;

/// A single game session and its scheduling state
pub struct GameSession {
    pub config: GameConfig,
    pub state: GameState,
    /// Time since the spawner last fired, milliseconds
    spawn_elapsed_ms: f32,
    on_game_over: Option<GameOverHandler>,
    game_over_fired: bool,
}

impl GameSession {
    /// Create a session in the idle phase
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            state: GameState::new(seed),
            spawn_elapsed_ms: 0.0,
            on_game_over: None,
            game_over_fired: false,
        }
    }

    /// Install the external game-over callback
    pub fn set_game_over_handler(&mut self, handler: GameOverHandler) {
        self.on_game_over = Some(handler);
    }

    /// Reset and begin a session (idle/terminal -> running).
    ///
    /// Always yields score 0, level 1, empty field and a zero boundary,
    /// regardless of prior state.
    pub fn start(&mut self, seed: u64) {
        self.state = GameState::new(seed);
        self.state.phase = GamePhase::Running;
        self.spawn_elapsed_ms = 0.0;
        self.game_over_fired = false;
        log::info!("Session started with seed {}", seed);
    }

    /// Stop the session without firing the game-over callback (external
    /// stop/restart signal). Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::GameOver;
            log::info!("Session stopped at score {}", self.state.score);
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    /// Advance one display frame: run the tick engine, then credit `dt_ms`
    /// to the spawn accumulator and fire the spawner for every full interval.
    ///
    /// Inert outside the running phase, so a terminal session can keep
    /// receiving host frames without being mutated.
    pub fn frame(&mut self, dt_ms: f32) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        let events = sim::tick(&mut self.state, &self.config);
        self.dispatch_game_over(&events);

        // Spawner: period re-read every frame so a level change takes
        // effect immediately. A non-positive interval (possible through a
        // config override) disables the spawner instead of spinning.
        self.spawn_elapsed_ms += dt_ms.max(0.0);
        let interval = sim::spawn_interval_ms(&self.config, self.state.level);
        while interval > 0.0 && self.spawn_elapsed_ms >= interval && self.is_running() {
            self.state.spawn_letter(&self.config);
            self.spawn_elapsed_ms -= interval;
        }

        events
    }

    /// Forward a raw key identifier to the input resolver. A level-up
    /// restarts the spawn schedule with the new interval.
    pub fn key_press(&mut self, key: &str) -> Vec<GameEvent> {
        let events = sim::key_press(&mut self.state, &self.config, key);
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { .. }))
        {
            self.spawn_elapsed_ms = 0.0;
        }
        events
    }

    /// Invoke the game-over callback on the terminal edge, exactly once
    fn dispatch_game_over(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::GameOver { score } = event {
                if !self.game_over_fired {
                    self.game_over_fired = true;
                    log::info!("Game over at score {}", score);
                    if let Some(handler) = self.on_game_over.as_mut() {
                        handler(*score);
                    }
                }
            }
        }
    }
}
