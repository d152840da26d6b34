//! Forwarding solver events to the `log` facade.

use log::{Level, log, log_enabled};
use rootline_core::Observer;

use crate::traits::HasIterate;

/// Logs every iterate at a fixed level.
///
/// Each record carries the label, the iterate's position and its value, so
/// runs of several solvers can be told apart in a single log. Nothing is
/// formatted unless the level is enabled.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    level: Level,
}

impl LogObserver {
    /// Creates an observer logging at [`Level::Trace`].
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Trace,
        }
    }

    /// Sets the level records are emitted at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the label prefixed to each record.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E: HasIterate, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        if log_enabled!(self.level) {
            log!(
                self.level,
                "{}: x[{}] = {}",
                self.label,
                event.index(),
                event.x()
            );
        }
        None
    }
}
