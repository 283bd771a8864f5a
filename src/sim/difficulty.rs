//! Level-based difficulty scaling
//!
//! Pure functions of the current level; nothing here holds state.

use crate::config::GameConfig;

/// Fall speed at the given level, percent of height per frame.
/// Affine in the level: base + (level - 1) * increment.
pub fn fall_speed(config: &GameConfig, level: u32) -> f32 {
    config.initial_fall_speed + level.saturating_sub(1) as f32 * config.speed_increment_per_level
}

/// Spawn interval at the given level in milliseconds, floored at the
/// configured minimum.
pub fn spawn_interval_ms(config: &GameConfig, level: u32) -> f32 {
    let reduced = config.initial_spawn_ms
        - level.saturating_sub(1) as f32 * config.spawn_ms_decrement_per_level;
    reduced.max(config.min_spawn_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_values() {
        let config = GameConfig::default();
        assert!((fall_speed(&config, 1) - 0.2).abs() < f32::EPSILON);
        assert!((fall_speed(&config, 3) - 0.3).abs() < 1e-6);
        assert!((spawn_interval_ms(&config, 1) - 2000.0).abs() < f32::EPSILON);
        assert!((spawn_interval_ms(&config, 5) - 1600.0).abs() < 1e-3);
        // Level 16 would be 500ms exactly, anything beyond stays floored
        assert!((spawn_interval_ms(&config, 40) - 500.0).abs() < f32::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_fall_speed_monotone(level in 1u32..1000) {
            let config = GameConfig::default();
            prop_assert!(fall_speed(&config, level + 1) >= fall_speed(&config, level));
        }

        #[test]
        fn prop_fall_speed_affine(level in 1u32..1000) {
            let config = GameConfig::default();
            let expected = config.initial_fall_speed
                + (level - 1) as f32 * config.speed_increment_per_level;
            prop_assert!((fall_speed(&config, level) - expected).abs() < 1e-3);
        }

        #[test]
        fn prop_spawn_interval_floored(level in 1u32..10_000) {
            let config = GameConfig::default();
            let interval = spawn_interval_ms(&config, level);
            prop_assert!(interval >= config.min_spawn_ms);
            prop_assert!(interval <= config.initial_spawn_ms);
        }

        #[test]
        fn prop_spawn_interval_monotone(level in 1u32..1000) {
            let config = GameConfig::default();
            prop_assert!(
                spawn_interval_ms(&config, level + 1) <= spawn_interval_ms(&config, level)
            );
        }
    }
}
