use crate::components::ToolButton;
use crate::state::DrawingState;
use crate::stroke::{BrushShape, DrawingTool};
use std::ops::RangeInclusive;

/// Range of the size stepper buttons
pub const STEPPER_RANGE: RangeInclusive<f32> = 2.0..=20.0;
pub const STEPPER_STEP: f32 = 2.0;
/// Range of the size slider
pub const SLIDER_RANGE: RangeInclusive<f32> = 1.0..=50.0;

/// Next brush size for the -/+ stepper. Stepping down stops at the bottom
/// of [`STEPPER_RANGE`], stepping up stops at the top.
pub fn step_brush_size(size: f32, increment: bool) -> f32 {
    if increment {
        (size + STEPPER_STEP).min(*STEPPER_RANGE.end())
    } else {
        (size - STEPPER_STEP).max(*STEPPER_RANGE.start())
    }
}

/// Picking a shape means the user wants to paint, so the eraser is dropped
pub fn select_shape(state: &mut DrawingState, shape: BrushShape) {
    state.set_brush_shape(shape);
    if state.current_tool() == DrawingTool::Eraser {
        state.set_current_tool(DrawingTool::Brush);
    }
}

pub fn tool_panel(ui: &mut egui::Ui, state: &mut DrawingState) {
    ui.horizontal(|ui| {
        let tool = state.current_tool();
        if ToolButton::new("✏", "Brush", tool == DrawingTool::Brush)
            .show(ui)
            .clicked()
        {
            log::debug!("Tool selected from UI: Brush");
            state.set_current_tool(DrawingTool::Brush);
        }
        if ToolButton::new("⌫", "Eraser", tool == DrawingTool::Eraser)
            .show(ui)
            .clicked()
        {
            log::debug!("Tool selected from UI: Eraser");
            state.set_current_tool(DrawingTool::Eraser);
        }

        ui.separator();

        for shape in BrushShape::ALL {
            let selected = state.brush_shape() == shape && tool == DrawingTool::Brush;
            if ToolButton::new(shape.icon(), shape.name(), selected)
                .show(ui)
                .clicked()
            {
                select_shape(state, shape);
            }
        }

        ui.separator();

        let size = state.brush_size();
        if ui
            .add_enabled(size > *STEPPER_RANGE.start(), egui::Button::new("−"))
            .clicked()
        {
            state.set_brush_size(step_brush_size(size, false));
        }
        ui.label(format!("{}", state.brush_size()));
        if ui
            .add_enabled(size < *STEPPER_RANGE.end(), egui::Button::new("+"))
            .clicked()
        {
            state.set_brush_size(step_brush_size(size, true));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Size:");
        let mut size = state.brush_size();
        if ui
            .add(egui::Slider::new(&mut size, SLIDER_RANGE).step_by(1.0))
            .changed()
        {
            state.set_brush_size(size);
        }
    });
}
