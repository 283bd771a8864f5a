//! Per-frame simulation tick
//!
//! One call advances every falling letter, removes the ones that crossed the
//! boundary line, grows the danger zone and performs the edge-triggered
//! terminal transition. Order within a tick is fixed: position update, then
//! crossing detection, then boundary growth, then the game-over check.

use crate::config::GameConfig;

use super::difficulty::fall_speed;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the session by one frame tick.
///
/// Returns the observable events of this tick. A no-op outside the running
/// phase, so ticking a stopped session never mutates it.
pub fn tick(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    if state.phase != GamePhase::Running {
        return Vec::new();
    }

    state.time_ticks += 1;
    let mut events = Vec::new();

    // Position update
    let speed = fall_speed(config, state.level);
    for letter in state.letters.iter_mut() {
        letter.pos.y += speed;
    }

    // Crossing detection: partition out everything at or past the line
    let line = state.boundary_line(config);
    let mut crossed = false;
    state.letters.retain(|letter| {
        if letter.pos.y >= line {
            crossed = true;
            false
        } else {
            true
        }
    });

    // Expire pop markers
    for pop in state.pops.iter_mut() {
        pop.ttl_ticks = pop.ttl_ticks.saturating_sub(1);
    }
    state.pops.retain(|p| p.ttl_ticks > 0);

    // Boundary growth: one increment per crossing tick, no matter how many
    // letters landed together
    if crossed {
        state.boundary_height += config.boundary_increment;
        events.push(GameEvent::BoundaryGrew {
            height: state.boundary_height,
        });

        if state.boundary_height >= config.game_over_boundary() {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver { score: state.score });
        }
    }

    events
}
