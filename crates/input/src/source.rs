//! CrosstermEvents: the terminal-backed event source.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::core::EventSource;
use crate::map::map_event;
use crate::types::InputEvent;

/// Reads key and resize events from the controlling terminal.
///
/// The terminal must already be in raw mode.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(map_event(event::read()?))
    }
}
