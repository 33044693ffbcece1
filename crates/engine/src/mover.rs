//! Mover: one task per live word, advancing its row over time.
//!
//! A mover stops when its word expires past the bottom of the grid, when the
//! word leaves the registry for any other reason (its lease closes), or on
//! shutdown. It never re-inserts anything.

use std::sync::Arc;

use tracing::{debug, trace};

use typing_geek_core::{step_interval, RowAdvance, WordLease, WordRegistry};

use crate::shutdown::Shutdown;
use crate::stats::EngineStats;

/// How a mover ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverExit {
    /// Fell past the grid; the mover removed it.
    Expired,
    /// Someone else removed the word first.
    Removed,
    Shutdown,
}

pub struct Mover {
    pub registry: WordRegistry,
    pub lease: WordLease,
    pub velocity: u32,
    pub grid_height: u16,
    pub shutdown: Shutdown,
    pub stats: Arc<EngineStats>,
}

impl Mover {
    pub async fn run(mut self) -> MoverExit {
        let ticket = self.lease.ticket();
        let step = step_interval(self.velocity);

        loop {
            tokio::select! {
                _ = self.lease.removed() => {
                    trace!(key = %ticket.key, "mover released");
                    return MoverExit::Removed;
                }
                _ = self.shutdown.wait() => return MoverExit::Shutdown,
                _ = tokio::time::sleep(step) => {}
            }

            match self.registry.advance_row(ticket, self.grid_height) {
                Ok(RowAdvance::Moved(row)) => trace!(key = %ticket.key, row, "word moved"),
                Ok(RowAdvance::Expired(word)) => {
                    debug!(key = %ticket.key, text = %word.text(), "word expired");
                    self.stats.record_expiry();
                    return MoverExit::Expired;
                }
                // Removed between the wake-up and the update.
                Err(_) => return MoverExit::Removed,
            }
        }
    }
}
