//! Rolling log of handled input events

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of entries kept in the log
const MAX_ENTRIES: usize = 50;

/// A single logged event with the time it was handled
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub at: DateTime<Local>,
    pub description: String,
}

/// Bounded list of recent events, newest first
#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
}

impl EventLog {
    /// Record an event; the oldest entry is evicted once the log is full
    pub fn record(&mut self, description: impl Into<String>) {
        self.entries.push_front(LoggedEvent {
            at: Local::now(),
            description: description.into(),
        });
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Entries in newest-first order
    pub fn entries(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
