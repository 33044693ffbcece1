//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`] and provides the
//! blocking [`CrosstermEvents`] source that the engine's event pump polls.

pub mod map;
pub mod source;

pub use typing_geek_core as core;
pub use typing_geek_types as types;

pub use map::{handle_key_event, map_event, should_quit};
pub use source::CrosstermEvents;
