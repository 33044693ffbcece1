//! Concurrent engine - runs the word core on tokio
//!
//! Every component is an independent execution context sharing one
//! [`WordRegistry`](typing_geek_core::WordRegistry):
//!
//! | Component | Runs as | Suspends on |
//! |-----------|---------|-------------|
//! | [`Spawner`] | task | spawn interval |
//! | [`Mover`] (one per word) | task owned by the spawner | `1s / velocity` step, word removal |
//! | input loop | task | next event from the pump |
//! | event pump | blocking-pool thread | event source poll (50ms max) |
//! | render loop | the task calling [`Engine::run`] | frame interval |
//!
//! All of them race their waits against [`Shutdown`], so nothing blocks exit.

pub mod config;
pub mod engine;
pub mod error;
pub mod input_loop;
pub mod mover;
pub mod pump;
pub mod render_loop;
pub mod shutdown;
pub mod spawner;
pub mod stats;

pub use typing_geek_core as core;
pub use typing_geek_types as types;

pub use config::GameConfig;
pub use engine::{Engine, EngineReport};
pub use error::EngineError;
pub use mover::{Mover, MoverExit};
pub use shutdown::Shutdown;
pub use spawner::{SpawnOutcome, Spawner};
pub use stats::{EngineStats, StatsSnapshot};
