//! Background loading of the record collection.
//!
//! The fetch runs on a tokio task so the UI can draw its (empty) table
//! immediately. The result comes back to the main loop as a
//! [`LoaderMessage`] over an unbounded channel, which the loop drains with
//! `try_recv()` between frames.

use tokio::sync::mpsc;
use tracing::warn;

use crate::data::{DataSource, Record};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum LoaderMessage {
    /// The record collection finished loading.
    RecordsLoaded(Result<Vec<Record>, String>),
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<LoaderMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<LoaderMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task that loads the records from `source`.
    pub fn spawn_load(&self, source: DataSource) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await.map_err(|e| {
                warn!(source = %source, error = %e, "Failed to load records");
                e.to_string()
            });
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(LoaderMessage::RecordsLoaded(result));
        });
    }
}
