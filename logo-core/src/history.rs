//! Snapshot-based undo/redo history.

use serde::{Deserialize, Serialize};

/// Undo/redo stacks over full-state snapshots.
///
/// `past` runs older-to-newer; `future` holds redo candidates newest-first.
/// Snapshots are owned clones with value semantics: once committed, nothing
/// outside this struct can alias them, so later edits to live state can
/// never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<T: Clone> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
}

impl<T: Clone> History<T> {
    /// Create a history with the given initial state and empty stacks.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
        }
    }

    /// The currently active snapshot.
    #[must_use]
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record a completed edit.
    ///
    /// Pushes the previous present onto `past` and discards `future`:
    /// editing after an undo permanently abandons the redo branch.
    pub fn commit(&mut self, snapshot: T) {
        let previous = std::mem::replace(&mut self.present, snapshot);
        self.past.push(previous);
        self.future.clear();
    }

    /// Replace the entire history with a fresh baseline.
    ///
    /// Used when a template is applied: the new state is a starting point,
    /// not an incremental edit, so both stacks are discarded.
    pub fn reset(&mut self, snapshot: T) {
        self.past.clear();
        self.future.clear();
        self.present = snapshot;
    }

    /// Step back one snapshot. Returns `false` (leaving state untouched)
    /// if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.insert(0, current);
        true
    }

    /// Step forward one snapshot. Returns `false` (leaving state untouched)
    /// if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            return false;
        }
        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of snapshots on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_inverse_law() {
        let mut history = History::new(0);
        for state in 1..=5 {
            history.commit(state);
        }

        // Undoing n times walks back through every committed state.
        for expected in (0..5).rev() {
            assert!(history.undo());
            assert_eq!(*history.present(), expected);
        }
        assert!(!history.undo(), "undo past the beginning is a no-op");

        // Redoing n times returns to the final state.
        for expected in 1..=5 {
            assert!(history.redo());
            assert_eq!(*history.present(), expected);
        }
        assert!(!history.redo(), "redo past the end is a no-op");
    }

    #[test]
    fn test_commit_discards_redo_branch() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);

        assert!(history.undo());
        assert_eq!(*history.present(), 1);
        assert!(history.can_redo());

        history.commit(99);
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(*history.present(), 99);
    }

    #[test]
    fn test_reset_clears_both_stacks() {
        let mut history = History::new(0);
        history.commit(1);
        history.undo();

        history.reset(42);
        assert_eq!(*history.present(), 42);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut history = History::new(vec![1, 2, 3]);
        let mut live = history.present().clone();
        live.push(4);
        history.commit(live.clone());

        // Mutating the live copy after commit must not reach the snapshot.
        live.push(5);
        assert_eq!(*history.present(), vec![1, 2, 3, 4]);

        history.undo();
        assert_eq!(*history.present(), vec![1, 2, 3]);
    }

    #[test]
    fn test_depths_track_stacks() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.redo_depth(), 0);

        history.undo();
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 1);
    }
}
