//! Spawner: periodically inserts new words and starts one mover per insert.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

use typing_geek_core::types::WordKey;
use typing_geek_core::{RegistryError, WordFactory, WordRegistry};

use crate::mover::{Mover, MoverExit};
use crate::shutdown::Shutdown;
use crate::stats::EngineStats;

/// Result of one spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned(WordKey),
    /// A live word already owns the key; this attempt is dropped.
    Collision(WordKey),
    /// The word list is empty.
    Exhausted,
}

pub struct Spawner {
    registry: WordRegistry,
    factory: WordFactory,
    interval: Duration,
    batch: u8,
    grid_height: u16,
    shutdown: Shutdown,
    stats: Arc<EngineStats>,
    movers: JoinSet<MoverExit>,
}

impl Spawner {
    pub fn new(
        registry: WordRegistry,
        factory: WordFactory,
        interval: Duration,
        grid_height: u16,
        shutdown: Shutdown,
        stats: Arc<EngineStats>,
    ) -> Self {
        Self {
            registry,
            factory,
            interval,
            batch: 1,
            grid_height,
            shutdown,
            stats,
            movers: JoinSet::new(),
        }
    }

    /// Spawn attempts per interval.
    pub fn with_batch(mut self, batch: u8) -> Self {
        self.batch = batch.max(1);
        self
    }

    /// Number of movers that have not been reaped yet.
    pub fn mover_count(&self) -> usize {
        self.movers.len()
    }

    /// Build one word and try to insert it; on success start its mover.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_once(&mut self) -> SpawnOutcome {
        let Some(word) = self.factory.next_word() else {
            return SpawnOutcome::Exhausted;
        };
        let velocity = word.velocity;

        match self.registry.insert(word) {
            Ok(lease) => {
                let key = lease.ticket().key;
                debug!(key = %key, velocity, "word spawned");
                self.stats.record_spawn();
                let mover = Mover {
                    registry: self.registry.clone(),
                    lease,
                    velocity,
                    grid_height: self.grid_height,
                    shutdown: self.shutdown.clone(),
                    stats: self.stats.clone(),
                };
                self.movers.spawn(mover.run());
                SpawnOutcome::Spawned(key)
            }
            Err(RegistryError::KeyCollision(key)) | Err(RegistryError::StaleReference(key)) => {
                trace!(key = %key, "spawn dropped: key is live");
                self.stats.record_collision();
                SpawnOutcome::Collision(key)
            }
        }
    }

    /// Run until shutdown, then wait for every mover to stop.
    pub async fn run(mut self) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.wait() => break,
                _ = ticker.tick() => {
                    for _ in 0..self.batch {
                        self.spawn_once();
                    }
                }
                // Reap finished movers so the set does not grow without bound.
                Some(_) = self.movers.join_next(), if !self.movers.is_empty() => {}
            }
        }

        while self.movers.join_next().await.is_some() {}
        debug!("spawner stopped");
    }
}
