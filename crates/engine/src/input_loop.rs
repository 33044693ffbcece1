//! Input loop: feeds events to the router one at a time.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info, trace};

use typing_geek_core::types::InputEvent;
use typing_geek_core::{InputRouter, RouterOutcome};

use crate::error::EngineError;
use crate::shutdown::Shutdown;
use crate::stats::EngineStats;

/// Messages from the event pump. `Err` is a fatal source error.
pub type PumpMessage = Result<InputEvent>;

pub async fn run_input_loop(
    mut router: InputRouter,
    mut events: mpsc::Receiver<PumpMessage>,
    shutdown: Shutdown,
    stats: Arc<EngineStats>,
) -> Result<(), EngineError> {
    loop {
        let message = tokio::select! {
            _ = shutdown.wait() => return Ok(()),
            message = events.recv() => message,
        };

        match message {
            Some(Ok(event)) => {
                let outcome = router.handle(event);
                trace!(?event, ?outcome, "input routed");
                stats.record_outcome(&outcome);
                if outcome == RouterOutcome::Exit {
                    info!("exit requested");
                    shutdown.trigger();
                    return Ok(());
                }
            }
            Some(Err(err)) => {
                error!(error = %err, "event source failed");
                shutdown.trigger();
                return Err(EngineError::EventSource(err));
            }
            None => {
                // The pump only hangs up on its way out.
                shutdown.trigger();
                return Ok(());
            }
        }
    }
}
