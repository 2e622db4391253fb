use egui::{Color32, Pos2};
use std::sync::Arc;

/// End-cap/join style selector for a brush
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BrushShape {
    #[default]
    Round,
    Square,
    Star,
}

impl BrushShape {
    pub const ALL: [BrushShape; 3] = [BrushShape::Round, BrushShape::Square, BrushShape::Star];

    pub fn name(self) -> &'static str {
        match self {
            BrushShape::Round => "Round",
            BrushShape::Square => "Square",
            BrushShape::Star => "Star",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BrushShape::Round => "●",
            BrushShape::Square => "■",
            BrushShape::Star => "★",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DrawingTool {
    #[default]
    Brush,
    Eraser,
}

impl DrawingTool {
    pub fn name(self) -> &'static str {
        match self {
            DrawingTool::Brush => "Brush",
            DrawingTool::Eraser => "Eraser",
        }
    }
}

/// Erasing paints in the canvas background color
pub const ERASER_COLOR: Color32 = Color32::WHITE;

/// One continuous line from gesture start to gesture end
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    size: f32,
    shape: BrushShape,
    tool: DrawingTool,
}

// Committed strokes are shared between the canvas and history snapshots
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, size: f32, shape: BrushShape, tool: DrawingTool) -> Self {
        Self {
            points: Vec::new(),
            color,
            size,
            shape,
            tool,
        }
    }

    /// Start a stroke seeded with its first sampled point
    pub fn begin(
        start: Pos2,
        color: Color32,
        size: f32,
        shape: BrushShape,
        tool: DrawingTool,
    ) -> Self {
        let mut stroke = Self::new(color, size, shape, tool);
        stroke.add_point(start);
        stroke
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn into_ref(self) -> StrokeRef {
        Arc::new(self)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn shape(&self) -> BrushShape {
        self.shape
    }

    pub fn tool(&self) -> DrawingTool {
        self.tool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_seeds_first_point() {
        let stroke = Stroke::begin(
            Pos2::new(3.0, 4.0),
            Color32::RED,
            5.0,
            BrushShape::Round,
            DrawingTool::Brush,
        );
        assert_eq!(stroke.points(), &[Pos2::new(3.0, 4.0)]);
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.size(), 5.0);
    }

    #[test]
    fn test_points_keep_order() {
        let mut stroke = Stroke::new(Color32::BLACK, 2.0, BrushShape::Square, DrawingTool::Brush);
        stroke.add_point(Pos2::new(0.0, 0.0));
        stroke.add_point(Pos2::new(5.0, 5.0));
        stroke.add_point(Pos2::new(10.0, 0.0));
        assert_eq!(
            stroke.points(),
            &[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), Pos2::new(10.0, 0.0)]
        );
        assert_eq!(stroke.shape(), BrushShape::Square);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BrushShape::default(), BrushShape::Round);
        assert_eq!(DrawingTool::default(), DrawingTool::Brush);
    }
}
