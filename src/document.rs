use crate::history::Snapshot;
use crate::stroke::{Stroke, StrokeRef};
use std::sync::Arc;

/// The ordered list of strokes currently on the canvas
#[derive(Debug, Default, Clone)]
pub struct Document {
    strokes: Vec<StrokeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Append a stroke and return its index
    pub fn add_stroke(&mut self, stroke: StrokeRef) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    /// Mutable access to a single stroke. Copies it first if a snapshot
    /// still shares it.
    pub fn stroke_mut(&mut self, index: usize) -> Option<&mut Stroke> {
        self.strokes.get_mut(index).map(Arc::make_mut)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.strokes.clone()
    }

    /// Replace the whole stroke list, returning the previous one
    pub fn replace(&mut self, strokes: Snapshot) -> Snapshot {
        std::mem::replace(&mut self.strokes, strokes)
    }

    pub fn clear(&mut self) -> Snapshot {
        self.replace(Vec::new())
    }
}
