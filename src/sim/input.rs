//! Key-press resolution and scoring
//!
//! Maps a raw key identifier to an alphabet glyph, picks the most urgent
//! matching letter (the one closest to the boundary), awards score and runs
//! the level controller.

use crate::config::GameConfig;

use super::state::{GameEvent, GamePhase, GameState, PopEffect};

/// Normalize a raw key identifier to its uppercase alphabet form.
///
/// Multi-character identifiers ("Enter", "Shift", ...) return `None`.
///
/// Turkish pairs the dotted and dotless i differently from naive Unicode
/// uppercasing: `i` uppercases to `İ` and `ı` to `I`. Both pairs are
/// canonicalized explicitly so a press matches its own alphabet letter no
/// matter which glyph variant the keyboard layout produces.
pub fn normalize_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match ch {
        'i' => Some('İ'),
        'ı' => Some('I'),
        _ => ch.to_uppercase().next(),
    }
}

/// Resolve one key press against the live letters.
///
/// Selects the matching letter with the greatest vertical position (ties:
/// exactly one of them), removes it, awards the per-letter reward, leaves a
/// pop marker behind and promotes the level on exact score multiples.
/// Unrecognized keys and non-matching presses are silently ignored.
pub fn key_press(state: &mut GameState, config: &GameConfig, key: &str) -> Vec<GameEvent> {
    if state.phase != GamePhase::Running {
        return Vec::new();
    }
    let Some(target) = normalize_key(key) else {
        return Vec::new();
    };

    // Most urgent target: greatest y among matches
    let Some(index) = state
        .letters
        .iter()
        .enumerate()
        .filter(|(_, letter)| letter.ch == target)
        .max_by(|a, b| {
            a.1.pos
                .y
                .partial_cmp(&b.1.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(index, _)| index)
    else {
        return Vec::new();
    };

    let letter = state.letters.remove(index);
    state.pops.push(PopEffect {
        id: letter.id,
        ch: letter.ch,
        pos: letter.pos,
        ttl_ticks: config.pop_ttl_ticks,
    });

    state.score += config.score_per_letter;
    let mut events = vec![GameEvent::LetterPopped {
        id: letter.id,
        ch: letter.ch,
        pos: letter.pos,
    }];

    // Level controller: promote only when the new score is an exact
    // multiple of the threshold
    if state.score > 0 && state.score % config.level_up_score == 0 {
        state.level += 1;
        events.push(GameEvent::LevelUp { level: state.level });
    }

    events
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::FallingLetter;

    fn running_state() -> GameState {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        state
    }

    fn push_letter(state: &mut GameState, ch: char, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.letters.push(FallingLetter {
            id,
            ch,
            pos: Vec2::new(x, y),
        });
        id
    }

    #[test]
    fn test_normalize_plain_letters() {
        assert_eq!(normalize_key("a"), Some('A'));
        assert_eq!(normalize_key("K"), Some('K'));
        assert_eq!(normalize_key("ç"), Some('Ç'));
        assert_eq!(normalize_key("ş"), Some('Ş'));
    }

    #[test]
    fn test_normalize_turkish_dotted_pairs() {
        // Dotted i pair
        assert_eq!(normalize_key("i"), Some('İ'));
        assert_eq!(normalize_key("İ"), Some('İ'));
        // Dotless i pair
        assert_eq!(normalize_key("ı"), Some('I'));
        assert_eq!(normalize_key("I"), Some('I'));
    }

    #[test]
    fn test_normalize_rejects_named_keys() {
        assert_eq!(normalize_key("Enter"), None);
        assert_eq!(normalize_key("Shift"), None);
        assert_eq!(normalize_key(""), None);
    }

    #[test]
    fn test_lowest_match_removed_first() {
        // Scenario: 'A' at y=40 and y=70; only the y=70 instance goes
        let config = GameConfig::default();
        let mut state = running_state();
        let high = push_letter(&mut state, 'A', 30.0, 40.0);
        let low = push_letter(&mut state, 'A', 60.0, 70.0);

        let events = key_press(&mut state, &config, "a");

        assert_eq!(state.score, config.score_per_letter);
        assert_eq!(state.letters.len(), 1);
        assert_eq!(state.letters[0].id, high);
        assert!(matches!(
            events.as_slice(),
            [GameEvent::LetterPopped { id, .. }] if *id == low
        ));
    }

    #[test]
    fn test_tied_matches_remove_exactly_one() {
        let config = GameConfig::default();
        let mut state = running_state();
        push_letter(&mut state, 'B', 20.0, 55.0);
        push_letter(&mut state, 'B', 80.0, 55.0);

        key_press(&mut state, &config, "b");

        assert_eq!(state.letters.len(), 1);
        assert_eq!(state.pops.len(), 1);
        assert_eq!(state.score, config.score_per_letter);
    }

    #[test]
    fn test_no_match_is_noop() {
        let config = GameConfig::default();
        let mut state = running_state();
        push_letter(&mut state, 'C', 50.0, 10.0);

        assert!(key_press(&mut state, &config, "x").is_empty());
        assert!(key_press(&mut state, &config, "Enter").is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.letters.len(), 1);
    }

    #[test]
    fn test_input_ignored_when_not_running() {
        let config = GameConfig::default();
        let mut state = running_state();
        push_letter(&mut state, 'D', 50.0, 10.0);
        state.phase = GamePhase::GameOver;

        assert!(key_press(&mut state, &config, "d").is_empty());
        assert_eq!(state.letters.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_dotted_letters_match_both_variants() {
        let config = GameConfig::default();
        let mut state = running_state();
        push_letter(&mut state, 'İ', 40.0, 20.0);
        push_letter(&mut state, 'I', 60.0, 20.0);

        assert_eq!(key_press(&mut state, &config, "i").len(), 1);
        assert_eq!(key_press(&mut state, &config, "ı").len(), 1);
        assert!(state.letters.is_empty());
    }

    #[test]
    fn test_level_up_on_exact_multiple() {
        // Scenario: ten rewards of 10 reach exactly 100, level 2 on that
        // update and only then
        let config = GameConfig::default();
        let mut state = running_state();

        for press in 1..=10 {
            push_letter(&mut state, 'E', 50.0, 30.0);
            let events = key_press(&mut state, &config, "e");
            if press < 10 {
                assert_eq!(state.level, 1);
                assert_eq!(events.len(), 1);
            } else {
                assert_eq!(state.score, 100);
                assert_eq!(state.level, 2);
                assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
            }
        }
    }

    #[test]
    fn test_no_level_up_off_multiple() {
        let config = GameConfig::default();
        let mut state = running_state();
        state.score = 95;
        push_letter(&mut state, 'F', 50.0, 30.0);

        key_press(&mut state, &config, "f");
        assert_eq!(state.score, 105);
        assert_eq!(state.level, 1);
    }
}
