//! In-memory counters for one run.

use std::sync::atomic::{AtomicU64, Ordering};

use typing_geek_core::RouterOutcome;

#[derive(Debug, Default)]
pub struct EngineStats {
    spawned: AtomicU64,
    collisions: AtomicU64,
    completed: AtomicU64,
    expired: AtomicU64,
    cancelled: AtomicU64,
    missed: AtomicU64,
}

/// Copy of the counters at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub spawned: u64,
    pub collisions: u64,
    pub completed: u64,
    pub expired: u64,
    pub cancelled: u64,
    pub missed: u64,
}

impl EngineStats {
    pub fn record_spawn(&self) {
        self.spawned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_collision(&self) {
        self.collisions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_expiry(&self) {
        self.expired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_outcome(&self, outcome: &RouterOutcome) {
        let counter = match outcome {
            RouterOutcome::Completed { .. } => &self.completed,
            RouterOutcome::Cancelled(_) => &self.cancelled,
            RouterOutcome::Missed { .. } => &self.missed,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            spawned: self.spawned.load(Ordering::Relaxed),
            collisions: self.collisions.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
            missed: self.missed.load(Ordering::Relaxed),
        }
    }
}
