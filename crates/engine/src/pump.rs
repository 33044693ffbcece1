//! Event pump: drains a blocking event source on a blocking-pool thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use typing_geek_core::types::{InputEvent, EVENT_POLL_MS};
use typing_geek_core::EventSource;

use crate::input_loop::PumpMessage;
use crate::shutdown::Shutdown;

/// Start pumping `source` into `tx`.
///
/// Resize events set `resized` instead of being forwarded. The pump checks the
/// shutdown flag between polls, so it stops within one poll timeout.
pub fn spawn_event_pump<E: EventSource>(
    mut source: E,
    tx: mpsc::Sender<PumpMessage>,
    shutdown: Shutdown,
    resized: Arc<AtomicBool>,
) -> JoinHandle<()> {
    let timeout = Duration::from_millis(EVENT_POLL_MS);

    tokio::task::spawn_blocking(move || {
        while !shutdown.is_triggered() {
            let message = match source.poll_event(timeout) {
                Ok(None) => continue,
                Ok(Some(InputEvent::Resize { width, height })) => {
                    debug!(width, height, "terminal resized");
                    resized.store(true, Ordering::Release);
                    continue;
                }
                Ok(Some(event)) => Ok(event),
                Err(err) => Err(err),
            };

            let fatal = message.is_err();
            if tx.blocking_send(message).is_err() || fatal {
                break;
            }
        }
        debug!("event pump stopped");
    })
}
