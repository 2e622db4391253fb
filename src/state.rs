//! The drawing state store.
//!
//! `DrawingState` owns the stroke list, the undo/redo history and the brush
//! settings. Presentation code holds one instance and drives it through the
//! gesture lifecycle:
//!
//! ```text
//!   start_drawing(x, y) ──► continue_drawing(x, y)* ──► finish_drawing()
//! ```
//!
//! Every operation is total: calls that make no sense in the current state
//! (undo with empty history, continuing while idle, ...) do nothing.

use crate::document::Document;
use crate::history::{History, Snapshot};
use crate::palette::{Palette, PaletteItem};
use crate::stroke::{BrushShape, DrawingTool, ERASER_COLOR, Stroke, StrokeRef};
use egui::{Color32, Pos2};

pub const DEFAULT_BRUSH_SIZE: f32 = 5.0;

/// Where the current pointer gesture stands
#[derive(Debug, Default, Clone)]
enum Gesture {
    #[default]
    Idle,
    Drawing {
        /// Index of the open stroke in the document, always the last one
        stroke_index: usize,
        /// Canvas as it was before the open stroke began
        before: Snapshot,
    },
}

#[derive(Debug, Clone)]
pub struct DrawingState {
    document: Document,
    history: History,
    selected_color: Color32,
    brush_size: f32,
    brush_shape: BrushShape,
    current_tool: DrawingTool,
    palette: Palette,
    gesture: Gesture,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::with_palette(Palette::default())
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            document: Document::new(),
            history: History::new(),
            selected_color: Color32::BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
            brush_shape: BrushShape::default(),
            current_tool: DrawingTool::default(),
            palette,
            gesture: Gesture::Idle,
        }
    }

    /// Begin a new stroke at `(x, y)`. Redo history is lost.
    pub fn start_drawing(&mut self, x: f32, y: f32) {
        if self.is_drawing() {
            log::debug!("New stroke started before the previous one finished");
            self.finish_drawing();
        }

        let color = match self.current_tool {
            DrawingTool::Eraser => ERASER_COLOR,
            DrawingTool::Brush => self.selected_color,
        };
        let stroke = Stroke::begin(
            Pos2::new(x, y),
            color,
            self.brush_size,
            self.brush_shape,
            self.current_tool,
        );

        let before = self.document.snapshot();
        let stroke_index = self.document.add_stroke(stroke.into_ref());
        self.history.clear_redo();
        self.gesture = Gesture::Drawing {
            stroke_index,
            before,
        };

        log::debug!(
            "Stroke {} started at ({}, {}) with {}",
            stroke_index,
            x,
            y,
            self.current_tool.name()
        );
    }

    /// Extend the open stroke. Ignored while idle.
    pub fn continue_drawing(&mut self, x: f32, y: f32) {
        let Some(index) = self.active_stroke_index() else {
            return;
        };
        if let Some(stroke) = self.document.stroke_mut(index) {
            stroke.add_point(Pos2::new(x, y));
        }
    }

    /// Freeze the open stroke and record exactly one undo entry for it
    pub fn finish_drawing(&mut self) {
        if let Gesture::Drawing {
            stroke_index,
            before,
        } = std::mem::take(&mut self.gesture)
        {
            self.history.record(before);
            let points = self
                .document
                .strokes()
                .get(stroke_index)
                .map_or(0, |stroke| stroke.points().len());
            log::debug!("Stroke {} finished with {} points", stroke_index, points);
        }
    }

    pub fn undo(&mut self) {
        self.finish_drawing();
        if !self.history.can_undo() {
            return;
        }
        if let Some(previous) = self.history.undo(self.document.snapshot()) {
            self.document.replace(previous);
            log::info!("Undo: {} strokes on canvas", self.document.len());
        }
    }

    pub fn redo(&mut self) {
        self.finish_drawing();
        if !self.history.can_redo() {
            return;
        }
        if let Some(next) = self.history.redo(self.document.snapshot()) {
            self.document.replace(next);
            log::info!("Redo: {} strokes on canvas", self.document.len());
        }
    }

    /// Remove every stroke. Undoable; does nothing on an empty canvas.
    pub fn clear_canvas(&mut self) {
        self.finish_drawing();
        if self.document.is_empty() {
            return;
        }
        let previous = self.document.clear();
        log::info!("Canvas cleared ({} strokes)", previous.len());
        self.history.record(previous);
        self.history.clear_redo();
    }

    pub fn add_custom_color(&mut self, color: Color32, name: Option<&str>) {
        self.palette.add(color, name);
        log::info!("Added custom color {:?}", color);
    }

    pub fn set_selected_color(&mut self, color: Color32) {
        self.selected_color = color;
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size;
    }

    pub fn set_brush_shape(&mut self, shape: BrushShape) {
        self.brush_shape = shape;
    }

    pub fn set_current_tool(&mut self, tool: DrawingTool) {
        self.current_tool = tool;
    }

    pub fn paths(&self) -> &[StrokeRef] {
        self.document.strokes()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn undo_len(&self) -> usize {
        self.history.undo_stack().len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_stack().len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    /// Index of the currently open stroke, if any
    pub fn active_stroke_index(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Drawing { stroke_index, .. } => Some(stroke_index),
            Gesture::Idle => None,
        }
    }

    pub fn selected_color(&self) -> Color32 {
        self.selected_color
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn brush_shape(&self) -> BrushShape {
        self.brush_shape
    }

    pub fn current_tool(&self) -> DrawingTool {
        self.current_tool
    }

    pub fn palette(&self) -> &[PaletteItem] {
        self.palette.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DrawingState::new();
        assert!(state.paths().is_empty());
        assert!(!state.is_drawing());
        assert_eq!(state.selected_color(), Color32::BLACK);
        assert_eq!(state.brush_size(), DEFAULT_BRUSH_SIZE);
        assert_eq!(state.brush_shape(), BrushShape::Round);
        assert_eq!(state.current_tool(), DrawingTool::Brush);
        assert_eq!(state.palette().len(), 12);
    }

    #[test]
    fn test_open_stroke_is_last() {
        let mut state = DrawingState::new();
        state.start_drawing(0.0, 0.0);
        state.finish_drawing();
        state.start_drawing(1.0, 1.0);

        assert_eq!(state.active_stroke_index(), Some(state.paths().len() - 1));
        state.finish_drawing();
        assert_eq!(state.active_stroke_index(), None);
    }

    #[test]
    fn test_continue_while_idle_is_noop() {
        let mut state = DrawingState::new();
        state.continue_drawing(5.0, 5.0);
        assert!(state.paths().is_empty());

        state.start_drawing(0.0, 0.0);
        state.finish_drawing();
        state.continue_drawing(5.0, 5.0);
        assert_eq!(state.paths()[0].points().len(), 1);
    }

    #[test]
    fn test_finish_while_idle_records_nothing() {
        let mut state = DrawingState::new();
        state.finish_drawing();
        assert_eq!(state.undo_len(), 0);
    }

    #[test]
    fn test_eraser_uses_background_color() {
        let mut state = DrawingState::new();
        state.set_selected_color(Color32::RED);
        state.set_current_tool(DrawingTool::Eraser);
        state.start_drawing(0.0, 0.0);
        state.finish_drawing();

        let stroke = &state.paths()[0];
        assert_eq!(stroke.color(), ERASER_COLOR);
        assert_eq!(stroke.tool(), DrawingTool::Eraser);
    }

    #[test]
    fn test_restart_while_drawing_commits_previous() {
        let mut state = DrawingState::new();
        state.start_drawing(0.0, 0.0);
        state.continue_drawing(1.0, 1.0);
        state.start_drawing(5.0, 5.0);
        state.finish_drawing();

        assert_eq!(state.paths().len(), 2);
        assert_eq!(state.undo_len(), 2);
    }

    #[test]
    fn test_undo_while_drawing_removes_open_stroke() {
        let mut state = DrawingState::new();
        state.start_drawing(0.0, 0.0);
        state.continue_drawing(1.0, 1.0);
        state.undo();

        assert!(!state.is_drawing());
        assert!(state.paths().is_empty());
        assert_eq!(state.redo_len(), 1);
    }

    #[test]
    fn test_setters_leave_paths_alone() {
        let mut state = DrawingState::new();
        state.start_drawing(0.0, 0.0);
        state.finish_drawing();

        state.set_selected_color(Color32::GREEN);
        state.set_brush_size(12.0);
        state.set_brush_shape(BrushShape::Star);

        assert_eq!(state.paths()[0].color(), Color32::BLACK);
        assert_eq!(state.paths()[0].size(), DEFAULT_BRUSH_SIZE);
        assert_eq!(state.paths()[0].shape(), BrushShape::Round);
        assert_eq!(state.undo_len(), 1);
    }

    #[test]
    fn test_add_custom_color_allows_duplicates() {
        let mut state = DrawingState::new();
        state.add_custom_color(Color32::RED, None);
        state.add_custom_color(Color32::RED, Some("Also red"));
        assert_eq!(state.palette().len(), 14);
        assert_eq!(state.palette()[12].color, state.palette()[13].color);
    }
}
