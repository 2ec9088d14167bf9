use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier. Derived from the wall clock in milliseconds, bumped past
/// the previous id when two items land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create an open item. Callers are responsible for trimming `text`.
    pub fn new(id: ItemId, text: String) -> Self {
        Item {
            id,
            text,
            completed: false,
        }
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Hands out unique, increasing ids.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Option<u64>,
}

impl IdAllocator {
    /// Allocate an id from the current wall clock.
    pub fn next(&mut self) -> ItemId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Allocate an id for the given clock reading. Never returns an id at or
    /// below a previously returned one, even if the clock goes backwards.
    pub fn next_at(&mut self, now_ms: u64) -> ItemId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        ItemId(id)
    }
}
