use std::collections::VecDeque;

use crate::{tick_reached, Tick};

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry<S> {
    pub tick: Tick,
    pub value: S,
}

/// Client-side queue of received values, in arrival order, waiting for the
/// local clock to reach their tick
#[derive(Clone, Debug)]
pub struct History<S> {
    entries: VecDeque<HistoryEntry<S>>,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> History<S> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, tick: Tick, value: S) {
        self.entries.push_back(HistoryEntry { tick, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn front(&self) -> Option<&HistoryEntry<S>> {
        self.entries.front()
    }

    /// Removes the front entry if its tick is at or before `current_tick`.
    /// A future entry stops the replay and stays queued.
    pub fn pop_due(&mut self, current_tick: Tick) -> Option<HistoryEntry<S>> {
        let front = self.entries.front()?;
        if !tick_reached(current_tick, front.tick) {
            return None;
        }
        self.entries.pop_front()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
