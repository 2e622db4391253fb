use crate::stroke::StrokeRef;

/// A full copy of the stroke list at one point in time
pub type Snapshot = Vec<StrokeRef>;

/// Linear undo/redo history over whole-canvas snapshots
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Canvas states that undo can return to
    undo_stack: Vec<Snapshot>,
    /// Canvas states that redo can return to
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record the state to go back to for a completed action
    pub fn record(&mut self, before: Snapshot) {
        self.undo_stack.push(before);
    }

    /// Invalidate redo history (any new forward action does this)
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Swap `current` with the most recent undo entry.
    /// Returns the state to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Inverse of [`History::undo`]
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Snapshot] {
        &self.redo_stack
    }
}
