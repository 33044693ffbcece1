//! Event source port.

use std::time::Duration;

use anyhow::Result;

use crate::types::InputEvent;

/// A lazy, non-restartable source of input events.
///
/// `poll_event` blocks for at most `timeout`. `Ok(None)` means nothing arrived
/// (or the raw event had no meaning for the game). `Err` is fatal.
pub trait EventSource: Send + 'static {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}
