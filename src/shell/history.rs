//! Command history
//!
//! Bounded and de-duplicated against the previous entry, with a navigation
//! cursor for up/down recall.

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward older entries
    Up,
    /// Toward newer entries and finally the empty prompt
    Down,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
    /// Steps back from the newest entry; `None` when not navigating.
    cursor: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            cursor: None,
        }
    }

    /// Record a line. Always resets the navigation cursor.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        if self.entries.back().map(String::as_str) == Some(line) {
            return;
        }
        self.entries.push_back(line.to_string());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Step the cursor and return the entry under it.
    ///
    /// `None` means nothing changed (empty history, or already at the oldest
    /// entry). Stepping down past the newest entry yields `Some("")` and
    /// leaves navigation.
    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let len = self.entries.len();
        match direction {
            Direction::Up => {
                let next = self.cursor.map_or(0, |c| c + 1);
                if next >= len {
                    return None;
                }
                self.cursor = Some(next);
                self.entries.get(len - 1 - next).map(String::as_str)
            }
            Direction::Down => match self.cursor {
                Some(c) if c > 0 => {
                    self.cursor = Some(c - 1);
                    self.entries.get(len - c).map(String::as_str)
                }
                _ => {
                    self.cursor = None;
                    Some("")
                }
            },
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
