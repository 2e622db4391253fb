#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod history;
pub mod input;
pub mod palette;
pub mod panels;
pub mod path;
pub mod state;
pub mod stroke;

pub use app::ColoringApp;
pub use canvas::CanvasView;
pub use config::BoardConfig;
pub use document::Document;
pub use history::{History, Snapshot};
pub use input::{GestureCapture, InputEvent, InputLocation};
pub use palette::{Palette, PaletteItem};
pub use path::{
    RenderMode, StrokeStyle, points_to_path_description, points_to_smooth_path_description,
};
pub use state::DrawingState;
pub use stroke::{BrushShape, DrawingTool, Stroke, StrokeRef};
