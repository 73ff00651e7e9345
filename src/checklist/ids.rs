//! Identifier generation for checklists and entries
//!
//! The store never invents ids itself; it asks an [`IdGenerator`]. Both
//! implementations only move forward and never hand out an id at or below
//! the floor set by [`IdGenerator::reserve_through`].

use chrono::Utc;

/// Source of fresh checklist and entry ids
pub trait IdGenerator: Send {
    /// Produce an id greater than every id handed out or reserved so far
    ///
    /// Returns `None` once the id space above the floor is used up.
    fn next_id(&mut self) -> Option<u64>;

    /// Mark every id up to and including `floor` as taken
    fn reserve_through(&mut self, floor: u64);
}

/// Plain counter: 1, 2, 3, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<u64> {
        self.last = self.last.checked_add(1)?;
        Some(self.last)
    }

    fn reserve_through(&mut self, floor: u64) {
        self.last = self.last.max(floor);
    }
}

/// Millisecond wall-clock ids, bumped when two requests share a millisecond
#[derive(Debug, Default, Clone)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> Option<u64> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.checked_add(1)?);
        Some(self.last)
    }

    fn reserve_through(&mut self, floor: u64) {
        self.last = self.last.max(floor);
    }
}
