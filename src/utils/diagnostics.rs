//! Diagnostic side channel for misconfiguration reports

use chrono::{DateTime, Utc};
use serde_derive::Serialize;
use tokio::sync::broadcast;

use crate::error::AugmentError;

/// Prefix carried by every diagnostic log line
pub const DIAGNOSTIC_PREFIX: &str = "[ERR_AUGMENT]";

/// Largest buffer a diagnostic channel will allocate
pub const MAX_DIAGNOSTIC_CAPACITY: usize = 65_536;

/// A reported misconfiguration, as seen by diagnostic subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub error: AugmentError,
}

impl From<&AugmentError> for Diagnostic {
    fn from(error: &AugmentError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            timestamp: Utc::now(),
            error: error.clone(),
        }
    }
}

/// Side channel for misconfiguration reports.
///
/// Wraps a `tokio::sync::broadcast::Sender<Diagnostic>` so that any number of
/// observers can watch registration and resolution failures without the
/// reporting code caring whether anyone listens. Receivers can be drained
/// synchronously with `try_recv`.
#[derive(Clone)]
pub struct Diagnostics {
    sender: broadcast::Sender<Diagnostic>,
}

impl Diagnostics {
    /// Creates a new `Diagnostics` channel with the given buffer capacity.
    ///
    /// The capacity is clamped to `1..=MAX_DIAGNOSTIC_CAPACITY`, since
    /// `broadcast::channel` panics on zero and on oversized buffers.
    ///
    /// # Examples
    ///
    /// ```
    /// use augment::utils::diagnostics::Diagnostics;
    ///
    /// let diagnostics = Diagnostics::new(64);
    /// let diagnostics_min = Diagnostics::new(0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.clamp(1, MAX_DIAGNOSTIC_CAPACITY));
        Diagnostics { sender }
    }

    /// Logs `error` and broadcasts it to every subscriber.
    ///
    /// Having no subscribers is not an error.
    pub fn report(&self, error: &AugmentError) {
        log::error!("{} {}", DIAGNOSTIC_PREFIX, error);
        let _ = self.sender.send(Diagnostic::from(error));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Diagnostic> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}
