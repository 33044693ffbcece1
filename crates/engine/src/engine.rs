//! Engine: starts every component against one registry and tears them down.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use typing_geek_core::{DrawSurface, EventSource, InputRouter, WordRegistry};

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::input_loop::{run_input_loop, PumpMessage};
use crate::pump::spawn_event_pump;
use crate::render_loop::run_render_loop;
use crate::shutdown::Shutdown;
use crate::spawner::Spawner;
use crate::stats::{EngineStats, StatsSnapshot};

/// Bound on queued, not yet routed events.
const EVENT_QUEUE_DEPTH: usize = 64;

/// Returned once every component has stopped; the surface may be released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineReport {
    pub stats: StatsSnapshot,
    pub frames: u64,
}

pub struct Engine {
    config: GameConfig,
    registry: WordRegistry,
    shutdown: Shutdown,
    stats: Arc<EngineStats>,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config: config.validated(),
            registry: WordRegistry::new(),
            shutdown: Shutdown::new(),
            stats: Arc::new(EngineStats::default()),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shared registry (read it, don't fight the engine over it).
    pub fn registry(&self) -> &WordRegistry {
        &self.registry
    }

    /// Handle that stops the engine from outside.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Run until the exit key, a fatal error, or an external shutdown.
    ///
    /// The render loop runs on the calling task and borrows `surface`; the
    /// spawner (with its movers), the input loop and the event pump run as
    /// separate tasks. All of them have stopped when this returns.
    pub async fn run<S, E>(&self, surface: &mut S, source: E) -> Result<EngineReport, EngineError>
    where
        S: DrawSurface + ?Sized,
        E: EventSource,
    {
        let config = &self.config;
        info!(
            width = config.grid_width,
            height = config.grid_height,
            fps = config.frames_per_second,
            words = config.word_list.len(),
            "engine starting"
        );

        let resized = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel::<PumpMessage>(EVENT_QUEUE_DEPTH);

        let pump = spawn_event_pump(source, tx, self.shutdown.clone(), resized.clone());

        let spawner = Spawner::new(
            self.registry.clone(),
            config.word_factory(),
            config.spawn_interval(),
            config.grid_height,
            self.shutdown.clone(),
            self.stats.clone(),
        )
        .with_batch(config.spawn_batch);
        let spawner = tokio::spawn(spawner.run());

        let input = tokio::spawn(run_input_loop(
            InputRouter::new(self.registry.clone()),
            rx,
            self.shutdown.clone(),
            self.stats.clone(),
        ));

        let rendered = run_render_loop(
            &self.registry,
            surface,
            config.frames_per_second,
            &self.shutdown,
            &resized,
        )
        .await;

        // Whatever ended the render loop, everyone else stops too.
        self.shutdown.trigger();
        let input = input.await;
        spawner.await?;
        let cleared = self.registry.clear();
        pump.await?;
        debug!(cleared, "all components stopped");

        let frames = rendered?;
        input??;

        let report = EngineReport {
            stats: self.stats.snapshot(),
            frames,
        };
        info!(?report, "engine stopped");
        Ok(report)
    }
}
