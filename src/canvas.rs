use crate::config::BoardConfig;
use crate::input::{GestureCapture, InputEvent};
use crate::path::{LineCap, RenderMode, StrokeStyle, flatten};
use crate::state::DrawingState;
use crate::stroke::{Stroke, StrokeRef};
use egui::{Color32, Painter, Pos2, Rect, Response, Sense, Shape, Ui, Vec2};

pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
pub const GRID_COLOR: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);
const GRID_LINE_WIDTH: f32 = 1.0;
/// Segments per cubic when painting smoothed strokes
const CURVE_STEPS: usize = 8;

/// The drawing surface: sizing, painting and pointer capture
#[derive(Debug, Clone)]
pub struct CanvasView {
    margin: f32,
    height_ratio: f32,
    max_height: f32,
    show_grid: bool,
    grid_size: f32,
    render_mode: RenderMode,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl CanvasView {
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            margin: config.canvas_margin,
            height_ratio: config.canvas_height_ratio,
            max_height: config.canvas_max_height,
            show_grid: config.show_grid,
            grid_size: config.grid_size,
            render_mode: config.render_mode,
        }
    }

    /// Canvas pixel size for a viewport. Recomputed every frame, so
    /// resizes and rotations apply without touching recorded points.
    pub fn canvas_size(&self, viewport: Vec2) -> Vec2 {
        let width = (viewport.x - 2.0 * self.margin).max(0.0);
        let height = (viewport.y * self.height_ratio)
            .min(self.max_height)
            .max(0.0);
        Vec2::new(width, height)
    }

    /// Offsets of the horizontal and vertical grid lines, edges included
    pub fn grid_lines(&self, size: Vec2) -> (Vec<f32>, Vec<f32>) {
        let offsets = |extent: f32| {
            (0..)
                .map(|i| i as f32 * self.grid_size)
                .take_while(|offset| *offset <= extent)
                .collect::<Vec<_>>()
        };
        (offsets(size.y), offsets(size.x))
    }

    /// Lay out the canvas, feed it this frame's pointer events and paint it
    pub fn show(
        &self,
        ui: &mut Ui,
        state: &mut DrawingState,
        capture: &mut GestureCapture,
        accept_input: bool,
    ) -> Response {
        let viewport = ui.ctx().screen_rect().size();
        let mut size = self.canvas_size(viewport);
        size.x = size.x.min(ui.available_width());

        let (response, painter) = ui.allocate_painter(size, Sense::drag());
        capture.set_canvas_rect(response.rect);
        capture.set_canvas_layer(ui.layer_id());

        if accept_input {
            capture.update(ui.ctx(), state);
        } else if capture.is_pointer_down() {
            capture.handle(&InputEvent::PointerCancel, state);
        }

        self.paint(&painter, response.rect, state.paths());
        response
    }

    pub fn paint(&self, painter: &Painter, rect: Rect, paths: &[StrokeRef]) {
        painter.rect_filled(rect, 8.0, BACKGROUND_COLOR);

        if self.show_grid {
            let (rows, columns) = self.grid_lines(rect.size());
            let stroke = egui::Stroke::new(GRID_LINE_WIDTH, GRID_COLOR);
            for y in rows {
                painter.hline(rect.x_range(), rect.min.y + y, stroke);
            }
            for x in columns {
                painter.vline(rect.min.x + x, rect.y_range(), stroke);
            }
        }

        for stroke in paths {
            self.paint_stroke(painter, rect.min, stroke);
        }
    }

    fn paint_stroke(&self, painter: &Painter, origin: Pos2, stroke: &Stroke) {
        let commands = self.render_mode.commands(stroke.points());
        if commands.is_empty() {
            return;
        }

        let points: Vec<Pos2> = flatten(&commands, CURVE_STEPS)
            .into_iter()
            .map(|p| origin + p.to_vec2())
            .collect();
        let width = stroke.size();
        let color = stroke.color();

        if StrokeStyle::for_shape(stroke.shape()).cap == LineCap::Round {
            // Discs at every vertex give round joins and caps
            for p in &points {
                painter.circle_filled(*p, width / 2.0, color);
            }
        }
        painter.add(Shape::line(points, egui::Stroke::new(width, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_follows_viewport() {
        let view = CanvasView::default();
        assert_eq!(view.canvas_size(Vec2::new(400.0, 800.0)), Vec2::new(368.0, 480.0));
        assert_eq!(view.canvas_size(Vec2::new(1024.0, 1200.0)), Vec2::new(992.0, 500.0));
        assert_eq!(view.canvas_size(Vec2::new(10.0, 0.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_grid_lines_include_edges() {
        let view = CanvasView::default();
        let (rows, columns) = view.grid_lines(Vec2::new(40.0, 30.0));
        assert_eq!(rows, vec![0.0, 20.0]);
        assert_eq!(columns, vec![0.0, 20.0, 40.0]);
    }

    #[test]
    fn test_paint_emits_shapes() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);

        let mut state = DrawingState::new();
        state.start_drawing(10.0, 10.0);
        state.continue_drawing(20.0, 20.0);
        state.finish_drawing();

        CanvasView::default().paint(&painter, rect, state.paths());
    }
}
