//! Sinks for the client's human-readable status messages.

use std::sync::{Arc, Mutex, MutexGuard};

/// Accepts a status message for later display. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn record(&self, message: String);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn record(&self, message: String) {
        (**self).record(message)
    }
}

/// In-memory message list, shared between clones.
///
/// Hand one clone to the client and keep another to render or inspect what
/// was recorded.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic mid-push cannot leave a half-written String behind.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for MessageLog {
    fn record(&self, message: String) {
        self.lock().push(message);
    }
}

/// Forwards every message to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn record(&self, message: String) {
        tracing::info!(target: "hero_core::notifier", "{message}");
    }
}
