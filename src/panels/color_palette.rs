use crate::state::DrawingState;
use crate::stroke::DrawingTool;
use egui::{Color32, Sense, Stroke, Ui, Vec2};

const SWATCH_SIZE: f32 = 28.0;
const SELECTED_RING: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);

/// Swatch row plus the custom color window
#[derive(Debug, Clone)]
pub struct ColorPalettePanel {
    picker_open: bool,
    custom_color: Color32,
}

impl Default for ColorPalettePanel {
    fn default() -> Self {
        Self {
            picker_open: false,
            custom_color: Color32::WHITE,
        }
    }
}

impl ColorPalettePanel {
    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    /// Add the picked color to the palette and paint with it
    pub fn save_custom_color(&mut self, state: &mut DrawingState) {
        state.add_custom_color(self.custom_color, None);
        state.set_selected_color(self.custom_color);
        self.picker_open = false;
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut DrawingState) {
        ui.horizontal(|ui| {
            ui.label("🎨 Colors");
        });

        egui::ScrollArea::horizontal()
            .id_salt("color_palette")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let erasing = state.current_tool() == DrawingTool::Eraser;
                    let mut picked = None;
                    for item in state.palette() {
                        let selected = !erasing && state.selected_color() == item.color;
                        if swatch(ui, item.color, selected)
                            .on_hover_text(item.name.as_str())
                            .clicked()
                        {
                            picked = Some(item.color);
                        }
                    }
                    if let Some(color) = picked {
                        state.set_selected_color(color);
                    }

                    if ui.button("+").on_hover_text("Add custom color").clicked() {
                        self.open_picker();
                    }
                });
            });

        self.show_picker(ui.ctx(), state);
    }

    fn show_picker(&mut self, ctx: &egui::Context, state: &mut DrawingState) {
        if !self.picker_open {
            return;
        }

        let mut save = false;
        let mut cancel = false;
        egui::Window::new("Select Custom Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.custom_color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.label(crate::color::to_hex(self.custom_color));
                ui.horizontal(|ui| {
                    cancel = ui.button("Cancel").clicked();
                    save = ui.button("Add").clicked();
                });
            });

        if save {
            self.save_custom_color(state);
        } else if cancel {
            self.picker_open = false;
        }
    }
}

fn swatch(ui: &mut Ui, color: Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let radius = SWATCH_SIZE / 2.0 - 2.0;
        ui.painter().circle_filled(center, radius, color);
        // white would vanish against a light background
        ui.painter()
            .circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(0xd1)));
        if selected {
            ui.painter()
                .circle_stroke(center, radius + 2.0, Stroke::new(2.0, SELECTED_RING));
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_custom_color_adds_and_selects() {
        let mut state = DrawingState::new();
        let mut panel = ColorPalettePanel::default();
        panel.open_picker();
        panel.save_custom_color(&mut state);

        assert!(!panel.is_picker_open());
        assert_eq!(state.palette().len(), 13);
        assert_eq!(state.palette()[12].name, "#ffffff");
        assert_eq!(state.selected_color(), Color32::WHITE);
    }
}
