pub mod color_palette;
pub mod header;
pub mod tool_panel;

pub use color_palette::ColorPalettePanel;
pub use header::{ClearRequest, Header, Notice};
pub use tool_panel::tool_panel;
