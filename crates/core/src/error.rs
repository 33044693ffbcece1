//! Registry error taxonomy.
//!
//! Both variants are expected under concurrency and are resolved locally by
//! whichever component observes them.

use thiserror::Error;

use crate::types::WordKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Insert refused: a live word already owns this key.
    #[error("word key {0} is already live")]
    KeyCollision(WordKey),
    /// The addressed word is no longer live (removed, or replaced by a newer word).
    #[error("word {0} is no longer live")]
    StaleReference(WordKey),
}
