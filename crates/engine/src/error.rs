//! Fatal engine errors.
//!
//! Per-word races never surface here; they are resolved inside the component
//! that observes them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to initialise the draw surface")]
    DrawSurfaceInit(#[source] anyhow::Error),
    #[error("draw surface failed")]
    DrawSurface(#[source] anyhow::Error),
    #[error("event source failed")]
    EventSource(#[source] anyhow::Error),
    #[error("engine task failed")]
    Task(#[from] tokio::task::JoinError),
}
