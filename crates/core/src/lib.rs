//! Core word engine - synchronous, deterministic, and testable
//!
//! This crate holds the shared state and rules of the game. It does no I/O and
//! spawns nothing; the engine crate drives it from concurrent tasks.
//!
//! # Module Structure
//!
//! - [`registry`]: shared map of live words with per-word atomic updates and liveness leases
//! - [`router`]: the single-active-word keystroke state machine
//! - [`spawner`]: word construction (text, column, velocity) for the spawner task
//! - [`rng`]: LCG and shuffled index bag
//! - [`motion`]: mover step and frame timing
//! - [`render`]: [`DrawSurface`] port and frame composition
//! - [`events`]: [`EventSource`] port
//!
//! # Example
//!
//! ```
//! use typing_geek_core::{InputRouter, RouterOutcome, WordRegistry};
//! use typing_geek_types::{Word, WordKey};
//!
//! let registry = WordRegistry::new();
//! let _lease = registry.insert(Word::new("cat", 10, 2).unwrap()).unwrap();
//!
//! let mut router = InputRouter::new(registry.clone());
//! router.handle_key('c');
//! router.handle_key('a');
//! let done = router.handle_key('t');
//!
//! assert!(matches!(done, RouterOutcome::Completed { .. }));
//! assert!(!registry.contains(WordKey::new('c')));
//! ```

pub mod error;
pub mod events;
pub mod motion;
pub mod registry;
pub mod render;
pub mod rng;
pub mod router;
pub mod spawner;

pub use typing_geek_types as types;

pub use error::RegistryError;
pub use events::EventSource;
pub use motion::{frame_interval, step_interval};
pub use registry::{BindOutcome, RowAdvance, TypeOutcome, WordLease, WordRegistry, WordTicket};
pub use render::{draw_words, render_frame, DrawSurface};
pub use rng::{IndexBag, SimpleRng};
pub use router::{InputRouter, RouterOutcome, RouterState};
pub use spawner::{WordFactory, WordOrder};
