//! Game configuration: defaults plus environment overrides.
//!
//! # Environment Variables
//!
//! - `TYPING_GEEK_WIDTH` / `TYPING_GEEK_HEIGHT`: grid size (default 60x30)
//! - `TYPING_GEEK_FPS`: render cadence, clamped to 1-60 (default 25)
//! - `TYPING_GEEK_WORDS`: comma separated word list
//! - `TYPING_GEEK_WORD_ORDER`: `random`, `cycle` or `bag` (default `random`)
//! - `TYPING_GEEK_SPAWN_MS`: spawn interval (default 800)
//! - `TYPING_GEEK_SPAWN_BATCH`: spawn attempts per interval (default 1)
//! - `TYPING_GEEK_VELOCITY`: rows per second (default 2)
//! - `TYPING_GEEK_SEED`: RNG seed (default: wall clock)
//!
//! Values that fail to parse fall back to their defaults.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use typing_geek_core::{SimpleRng, WordFactory, WordOrder};
use typing_geek_types::{
    DEFAULT_BASE_VELOCITY, DEFAULT_FPS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_SPAWN_BATCH, DEFAULT_SPAWN_INTERVAL_MS, DEFAULT_WORDS, MAX_FPS, MIN_FPS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub frames_per_second: u8,
    pub word_list: Vec<String>,
    pub word_order: WordOrder,
    pub spawn_interval_ms: u64,
    pub spawn_batch: u8,
    pub base_velocity: u32,
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            frames_per_second: DEFAULT_FPS,
            word_list: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            word_order: WordOrder::default(),
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            spawn_batch: DEFAULT_SPAWN_BATCH,
            base_velocity: DEFAULT_BASE_VELOCITY,
            seed: None,
        }
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl GameConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let word_list = env::var("TYPING_GEEK_WORDS")
            .ok()
            .map(|s| parse_word_list(&s))
            .unwrap_or(defaults.word_list);

        Self {
            grid_width: env_parse("TYPING_GEEK_WIDTH").unwrap_or(defaults.grid_width),
            grid_height: env_parse("TYPING_GEEK_HEIGHT").unwrap_or(defaults.grid_height),
            frames_per_second: env_parse("TYPING_GEEK_FPS").unwrap_or(defaults.frames_per_second),
            word_list,
            word_order: env_parse("TYPING_GEEK_WORD_ORDER").unwrap_or(defaults.word_order),
            spawn_interval_ms: env_parse("TYPING_GEEK_SPAWN_MS")
                .unwrap_or(defaults.spawn_interval_ms),
            spawn_batch: env_parse("TYPING_GEEK_SPAWN_BATCH").unwrap_or(defaults.spawn_batch),
            base_velocity: env_parse("TYPING_GEEK_VELOCITY").unwrap_or(defaults.base_velocity),
            seed: env_parse("TYPING_GEEK_SEED"),
        }
        .validated()
    }

    /// Clamp every field into its supported range.
    pub fn validated(mut self) -> Self {
        self.grid_width = self.grid_width.max(1);
        self.grid_height = self.grid_height.max(1);
        self.frames_per_second = self.frames_per_second.clamp(MIN_FPS, MAX_FPS);
        self.word_list.retain(|w| !w.trim().is_empty());
        if self.word_list.is_empty() {
            self.word_list = DEFAULT_WORDS.iter().map(|w| w.to_string()).collect();
        }
        self.spawn_interval_ms = self.spawn_interval_ms.max(1);
        self.spawn_batch = self.spawn_batch.max(1);
        self.base_velocity = self.base_velocity.max(1);
        self
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn word_factory(&self) -> WordFactory {
        let rng = self.seed.map_or_else(SimpleRng::from_time, SimpleRng::new);
        WordFactory::new(
            self.word_list.iter().cloned(),
            self.word_order,
            self.grid_width,
            self.base_velocity,
            rng,
        )
    }
}

/// Split a comma separated list, trimming blanks.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 60);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.frames_per_second, 25);
        assert_eq!(config.spawn_interval(), Duration::from_millis(800));
        assert_eq!(config.word_list.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn validated_clamps_out_of_range_values() {
        let config = GameConfig {
            grid_width: 0,
            grid_height: 0,
            frames_per_second: 120,
            word_list: vec!["  ".to_string()],
            spawn_interval_ms: 0,
            spawn_batch: 0,
            base_velocity: 0,
            ..GameConfig::default()
        }
        .validated();

        assert_eq!(config.grid_width, 1);
        assert_eq!(config.grid_height, 1);
        assert_eq!(config.frames_per_second, 60);
        assert_eq!(config.word_list.len(), DEFAULT_WORDS.len());
        assert_eq!(config.spawn_interval_ms, 1);
        assert_eq!(config.spawn_batch, 1);
        assert_eq!(config.base_velocity, 1);

        let slow = GameConfig {
            frames_per_second: 0,
            ..GameConfig::default()
        }
        .validated();
        assert_eq!(slow.frames_per_second, 1);
    }

    #[test]
    fn word_list_parsing_trims_and_drops_blanks() {
        assert_eq!(
            parse_word_list(" cat, dog ,,emu, "),
            vec!["cat".to_string(), "dog".to_string(), "emu".to_string()]
        );
    }

    #[test]
    fn seeded_factory_is_reproducible() {
        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        };
        let mut a = config.word_factory();
        let mut b = config.word_factory();
        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }
}
