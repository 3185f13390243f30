//! Today's additions, kept for display only

use std::collections::VecDeque;

/// First-in, first-out log of one-line summaries of records added during
/// this run
///
/// Nothing is ever removed; the queue lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct SessionQueue {
    lines: VecDeque<String>,
}

impl SessionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, text: impl Into<String>) {
        self.lines.push_back(text.into());
    }

    /// Current contents in arrival order
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
