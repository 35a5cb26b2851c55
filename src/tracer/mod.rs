//! Development overlay that records the state stream.
//!
//! The tracer only observes: it keeps a bounded history of committed states
//! for display and never writes back into the store.

use crate::config::TracerConfig;
use crate::store::Observer;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct TraceEntry<S> {
    /// Position in the stream, starting at 0 for the initial state.
    pub index: u64,
    pub at: DateTime<Local>,
    pub state: S,
}

impl<S: Serialize> TraceEntry<S> {
    /// Right-aligned index and wall-clock time, e.g. `  3 14:02:11`.
    pub fn stamp(&self) -> String {
        format!("{:>3} {}", self.index, self.at.format("%H:%M:%S"))
    }

    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}

#[derive(Debug)]
pub struct Tracer<S> {
    selector: String,
    rows: usize,
    entries: VecDeque<TraceEntry<S>>,
    next_index: u64,
}

impl<S: Clone + Serialize> Tracer<S> {
    pub fn new(config: &TracerConfig) -> Self {
        Self {
            selector: config.selector.clone(),
            rows: config.rows.max(1),
            entries: VecDeque::new(),
            next_index: 0,
        }
    }

    /// Region id the tracer panel is mounted on.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn record(&mut self, state: &S) {
        if self.entries.len() == self.rows {
            self.entries.pop_front();
        }
        self.entries.push_back(TraceEntry {
            index: self.next_index,
            at: Local::now(),
            state: state.clone(),
        });
        self.next_index += 1;
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &TraceEntry<S>> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&TraceEntry<S>> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total states seen, including those already dropped from history.
    pub fn total(&self) -> u64 {
        self.next_index
    }

    /// One display line per retained entry, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("{} {}", entry.stamp(), entry.state_json()))
            .collect()
    }
}

impl<S: Clone + Serialize> Observer<S> for Tracer<S> {
    fn notify(&mut self, state: &S) {
        self.record(state);
    }
}
