use crate::canvas::CanvasView;
use crate::config::BoardConfig;
use crate::input::GestureCapture;
use crate::palette::Palette;
use crate::panels::{ColorPalettePanel, Header, tool_panel};
use crate::state::DrawingState;
use egui::{Key, KeyboardShortcut, Modifiers};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Root of the UI. Owns the drawing state and hands it to the panels.
pub struct ColoringApp {
    state: DrawingState,
    capture: GestureCapture,
    canvas: CanvasView,
    header: Header,
    palette_panel: ColorPalettePanel,
}

impl Default for ColoringApp {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl ColoringApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::from_config(&config)
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        // Configs reaching here were validated on load, but a hand-built
        // one may still carry a bad color
        let palette = config.palette().unwrap_or_else(|err| {
            log::warn!("{err}; using default palette");
            Palette::default()
        });

        Self {
            state: DrawingState::with_palette(palette),
            capture: GestureCapture::default(),
            canvas: CanvasView::from_config(config),
            header: Header::new(config.notice_seconds),
            palette_panel: ColorPalettePanel::default(),
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // The shift variant must be consumed before plain Cmd+Z
        let redo = ctx.input_mut(|i| {
            i.consume_shortcut(&REDO_SHORTCUT) || i.consume_shortcut(&REDO_SHORTCUT_ALT)
        });
        let undo = ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT));

        if redo {
            self.state.redo();
        }
        if undo {
            self.state.undo();
        }
    }

    /// Lay out one frame of the whole board
    pub fn show(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header.show(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("tools").show(ctx, |ui| {
            ui.add_space(4.0);
            tool_panel(ui, &mut self.state);
            ui.separator();
            self.palette_panel.show(ui, &mut self.state);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let accept_input = !self.header.is_modal_open() && !self.palette_panel.is_picker_open();
            ui.vertical_centered(|ui| {
                self.canvas
                    .show(ui, &mut self.state, &mut self.capture, accept_input);
            });
        });
    }
}

impl eframe::App for ColoringApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
