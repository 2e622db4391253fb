use crate::state::DrawingState;
use egui::{Align2, Button, Context, Ui, Vec2};

/// Advisory message shown after pressing Save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NothingToSave,
    Saved,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::NothingToSave => "Nothing to Save",
            Notice::Saved => "Drawing Saved",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::NothingToSave => "Draw something before saving!",
            Notice::Saved => "Your artwork was saved successfully!",
        }
    }
}

/// Save does not persist anything, it only reports
pub fn save_notice(state: &DrawingState) -> Notice {
    if state.paths().is_empty() {
        Notice::NothingToSave
    } else {
        Notice::Saved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearRequest {
    /// Canvas already empty, no prompt
    Nothing,
    NeedsConfirmation,
}

pub fn request_clear(state: &DrawingState) -> ClearRequest {
    if state.paths().is_empty() {
        ClearRequest::Nothing
    } else {
        ClearRequest::NeedsConfirmation
    }
}

/// Undo/redo/save/clear bar and the dialogs it opens
#[derive(Debug, Clone)]
pub struct Header {
    confirm_clear: bool,
    notice: Option<(Notice, f64)>,
    notice_seconds: f64,
}

impl Header {
    pub fn new(notice_seconds: f64) -> Self {
        Self {
            confirm_clear: false,
            notice: None,
            notice_seconds,
        }
    }

    /// A dialog or notice is open and the canvas should ignore the pointer
    pub fn is_modal_open(&self) -> bool {
        self.confirm_clear || self.notice.is_some()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.map(|(notice, _)| notice)
    }

    pub fn save(&mut self, state: &DrawingState, now: f64) {
        let notice = save_notice(state);
        log::info!("Save pressed: {}", notice.title());
        self.notice = Some((notice, now + self.notice_seconds));
    }

    pub fn clear(&mut self, state: &DrawingState) {
        if request_clear(state) == ClearRequest::NeedsConfirmation {
            self.confirm_clear = true;
        }
    }

    pub fn confirm_clear(&mut self, state: &mut DrawingState) {
        state.clear_canvas();
        self.confirm_clear = false;
    }

    pub fn cancel_clear(&mut self) {
        self.confirm_clear = false;
    }

    /// Drop the notice once its time is up
    pub fn expire_notice(&mut self, now: f64) {
        if matches!(self.notice, Some((_, until)) if now >= until) {
            self.notice = None;
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut DrawingState) {
        let now = ui.input(|i| i.time);

        ui.horizontal(|ui| {
            ui.heading("Coloring Board");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").on_hover_text("Clear").clicked() {
                    self.clear(state);
                }
                if ui.button("💾").on_hover_text("Save").clicked() {
                    self.save(state, now);
                }
                if ui
                    .add_enabled(state.can_redo(), Button::new("⟳"))
                    .on_hover_text("Redo")
                    .clicked()
                {
                    state.redo();
                }
                if ui
                    .add_enabled(state.can_undo(), Button::new("⟲"))
                    .on_hover_text("Undo")
                    .clicked()
                {
                    state.undo();
                }
            });
        });

        self.show_dialogs(ui.ctx(), state, now);
    }

    fn show_dialogs(&mut self, ctx: &Context, state: &mut DrawingState, now: f64) {
        self.expire_notice(now);
        if let Some((notice, until)) = self.notice {
            let mut open = true;
            egui::Window::new(notice.title())
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .anchor(Align2::CENTER_TOP, Vec2::new(0.0, 48.0))
                .show(ctx, |ui| {
                    ui.label(notice.message());
                });
            if !open {
                self.notice = None;
            } else {
                ctx.request_repaint_after(std::time::Duration::from_secs_f64(
                    (until - now).max(0.0),
                ));
            }
        }

        if self.confirm_clear {
            let mut confirmed = false;
            let mut cancelled = false;
            egui::Window::new("Clear Canvas")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to clear the canvas?");
                    ui.horizontal(|ui| {
                        cancelled = ui.button("Cancel").clicked();
                        confirmed = ui.button("Clear").clicked();
                    });
                });
            if confirmed {
                self.confirm_clear(state);
            } else if cancelled {
                self.cancel_clear();
            }
        }
    }
}
