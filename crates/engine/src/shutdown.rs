//! Process-wide shutdown broadcast.

use std::sync::Arc;

use tokio::sync::watch;

/// Cloneable shutdown signal. Once triggered it stays triggered.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once [`trigger`](Self::trigger) has been called.
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        // The sender lives as long as `self`, so this only returns on trigger.
        let _ = rx.wait_for(|stop| *stop).await;
    }
}
