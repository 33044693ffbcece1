//! Typing Geek (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, integration
//! tests and benchmarks share one import surface:
//! `typing_geek::{core, engine, input, term, types}`.

pub mod logging;

pub use typing_geek_core as core;
pub use typing_geek_engine as engine;
pub use typing_geek_input as input;
pub use typing_geek_term as term;
pub use typing_geek_types as types;
