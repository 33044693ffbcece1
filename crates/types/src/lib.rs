//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (registry, router, rendering, terminal input).
//!
//! # Grid Dimensions
//!
//! Words fall on a fixed grid:
//!
//! - **Width**: 60 columns (indexed 0-59)
//! - **Height**: 30 rows (indexed 0-29)
//! - **Spawn row**: 0, at a random column
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 25 | Render cadence |
//! | `MIN_FPS` / `MAX_FPS` | 1 / 60 | Accepted render cadence range |
//! | `DEFAULT_SPAWN_INTERVAL_MS` | 800 | Time between spawn attempts |
//! | `DEFAULT_BASE_VELOCITY` | 2 | Rows per second for new words |
//! | `EVENT_POLL_MS` | 50 | Upper bound on a single event-source wait |
//!
//! # Examples
//!
//! ```
//! use typing_geek_types::{Word, WordKey};
//!
//! let word = Word::new("cat", 10, 2).unwrap();
//! assert_eq!(word.key(), WordKey::new('c'));
//! assert_eq!(word.expected(), Some('c'));
//! assert_eq!(word.remaining().collect::<String>(), "cat");
//! ```

use std::fmt;

/// Grid width in columns (60)
pub const DEFAULT_GRID_WIDTH: u16 = 60;

/// Grid height in rows (30)
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Default render cadence in frames per second
pub const DEFAULT_FPS: u8 = 25;

/// Slowest accepted render cadence
pub const MIN_FPS: u8 = 1;

/// Fastest accepted render cadence
pub const MAX_FPS: u8 = 60;

/// Default time between spawn attempts (800ms)
pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 800;

/// Default number of spawn attempts per interval
pub const DEFAULT_SPAWN_BATCH: u8 = 1;

/// Default word velocity (rows per second)
pub const DEFAULT_BASE_VELOCITY: u32 = 2;

/// Upper bound on one blocking wait for a terminal event (50ms).
///
/// Keeps the event pump responsive to shutdown.
pub const EVENT_POLL_MS: u64 = 50;

/// Words used when no list is configured.
///
/// Every entry starts with a different letter so spawn collisions only happen
/// when the same word is drawn twice while still on screen.
pub const DEFAULT_WORDS: [&str; 26] = [
    "anchor", "bridge", "candle", "dragon", "engine", "forest", "galaxy", "harbor", "island",
    "jungle", "kernel", "lantern", "meadow", "needle", "ocean", "pepper", "quartz", "river",
    "sunset", "thunder", "umbrella", "velvet", "window", "xylophone", "yellow", "zephyr",
];

/// Stable identifier of a live word: its first character.
///
/// At most one word per key can be live at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordKey(char);

impl WordKey {
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    /// Derive the key of `text` (its first character).
    ///
    /// Returns `None` for empty text.
    pub fn of(text: &str) -> Option<Self> {
        text.chars().next().map(Self)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A falling typing target.
///
/// `row` and `progress` are the only fields that change after spawn; they are
/// mutated exclusively through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    key: WordKey,
    text: Vec<char>,
    /// Fixed horizontal position, chosen at spawn.
    pub column: u16,
    /// Current vertical position, starts at 0.
    pub row: u16,
    /// Rows per second.
    pub velocity: u32,
    /// Number of leading characters already typed.
    pub progress: usize,
}

impl Word {
    /// Create a word at row 0 with no progress.
    ///
    /// Returns `None` when `text` is empty. A velocity of 0 is raised to 1.
    pub fn new(text: &str, column: u16, velocity: u32) -> Option<Self> {
        let key = WordKey::of(text)?;
        Some(Self {
            key,
            text: text.chars().collect(),
            column,
            row: 0,
            velocity: velocity.max(1),
            progress: 0,
        })
    }

    pub fn key(&self) -> WordKey {
        self.key
    }

    pub fn chars(&self) -> &[char] {
        &self.text
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a word is never empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Next character the player has to type, if any.
    pub fn expected(&self) -> Option<char> {
        self.text.get(self.progress).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.text.len()
    }

    /// Untyped suffix of the word.
    pub fn remaining(&self) -> impl Iterator<Item = char> + '_ {
        self.text.iter().skip(self.progress).copied()
    }
}

/// Input events delivered by an event source.
///
/// Raw terminal events are mapped into this enum by the input layer. Fatal
/// source errors are not events; they travel as `Err` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character was typed.
    Key(char),
    /// Abandon the active word (Esc).
    Cancel,
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// Stop the whole game (Ctrl-C / Ctrl-X).
    Exit,
}
