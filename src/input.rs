use crate::state::DrawingState;
use egui::{Context, LayerId, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events the canvas reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button (or touch) went down
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the button held
    PointerMove { location: InputLocation },
    /// Primary button (or touch) was released
    PointerUp { location: InputLocation },
    /// The gesture was interrupted: pointer left the window or focus was lost
    PointerCancel,
}

/// Turns pointer gestures on the canvas into drawing operations.
///
/// Coordinates handed to the drawing state are local to the canvas origin.
#[derive(Debug, Clone)]
pub struct GestureCapture {
    canvas_rect: Rect,
    /// Layer the canvas is painted on. Presses over any other layer are
    /// not the canvas's.
    canvas_layer: Option<LayerId>,
    /// A gesture that began inside the canvas is still held down
    pointer_down: bool,
}

impl Default for GestureCapture {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl GestureCapture {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            canvas_layer: None,
            pointer_down: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn set_canvas_layer(&mut self, layer: LayerId) {
        self.canvas_layer = Some(layer);
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Screen position to canvas-local position
    pub fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Some other layer, such as a window, sits on top of the canvas at `pos`
    fn is_covered(&self, ctx: &Context, pos: Pos2) -> bool {
        match self.canvas_layer {
            Some(canvas_layer) => ctx
                .layer_id_at(pos)
                .is_some_and(|layer| layer != canvas_layer),
            None => false,
        }
    }

    /// Collect this frame's pointer events, in the order they happened
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        let events = ctx.input(|input| input.raw.events.clone());
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let mut location = self.make_location(*pos);
                    Some(if *pressed {
                        location.is_in_canvas &= !self.is_covered(ctx, *pos);
                        InputEvent::PointerDown { location }
                    } else {
                        InputEvent::PointerUp { location }
                    })
                }
                egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                    location: self.make_location(*pos),
                }),
                egui::Event::PointerGone | egui::Event::WindowFocused(false) => {
                    Some(InputEvent::PointerCancel)
                }
                _ => None,
            })
            .collect()
    }

    /// Forward one event to the drawing state
    pub fn handle(&mut self, event: &InputEvent, state: &mut DrawingState) {
        match event {
            InputEvent::PointerDown { location } => {
                if !location.is_in_canvas {
                    return;
                }
                let local = self.to_local(location.position);
                self.pointer_down = true;
                state.start_drawing(local.x, local.y);
            }
            InputEvent::PointerMove { location } => {
                if self.pointer_down {
                    let local = self.to_local(location.position);
                    state.continue_drawing(local.x, local.y);
                }
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerCancel => {
                if self.pointer_down {
                    self.pointer_down = false;
                    state.finish_drawing();
                }
            }
        }
    }

    /// Process and handle everything egui received this frame
    pub fn update(&mut self, ctx: &Context, state: &mut DrawingState) {
        for event in self.process_input(ctx) {
            self.handle(&event, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> GestureCapture {
        GestureCapture::new(Rect::from_min_size(
            Pos2::new(100.0, 50.0),
            egui::vec2(200.0, 100.0),
        ))
    }

    #[test]
    fn test_to_local() {
        let capture = canvas();
        assert_eq!(capture.to_local(Pos2::new(110.0, 70.0)), Pos2::new(10.0, 20.0));
    }

    #[test]
    fn test_make_location() {
        let capture = canvas();
        assert!(capture.make_location(Pos2::new(150.0, 60.0)).is_in_canvas);
        assert!(!capture.make_location(Pos2::new(10.0, 10.0)).is_in_canvas);
    }
}
