use crate::color;
use crate::error::{ConfigError, ConfigResult};
use crate::palette::{Palette, PaletteItem};
use crate::path::RenderMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the path of an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "COLORING_BOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// `#rrggbb`
    pub color: String,
    pub name: String,
}

/// Board settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Horizontal space left on each side of the canvas
    pub canvas_margin: f32,
    /// Canvas height as a fraction of the viewport height
    pub canvas_height_ratio: f32,
    pub canvas_max_height: f32,
    pub show_grid: bool,
    pub grid_size: f32,
    /// How long save notices stay on screen
    pub notice_seconds: f64,
    pub render_mode: RenderMode,
    pub palette: Vec<PaletteEntry>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let palette = Palette::default()
            .items()
            .iter()
            .map(|item| PaletteEntry {
                color: color::to_hex(item.color),
                name: item.name.clone(),
            })
            .collect();

        Self {
            canvas_margin: 16.0,
            canvas_height_ratio: 0.6,
            canvas_max_height: 500.0,
            show_grid: true,
            grid_size: 20.0,
            notice_seconds: 2.5,
            render_mode: RenderMode::default(),
            palette,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `COLORING_BOARD_CONFIG` if it is set, defaults otherwise
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading board config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Like [`BoardConfig::from_env`], but a broken config only costs a warning
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            log::warn!("{err}; using default board config");
            Self::default()
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.canvas_height_ratio > 0.0 && self.canvas_height_ratio <= 1.0) {
            return Err(ConfigError::InvalidValue(format!(
                "canvas_height_ratio must be in (0, 1], got {}",
                self.canvas_height_ratio
            )));
        }
        if self.canvas_max_height <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "canvas_max_height must be positive, got {}",
                self.canvas_max_height
            )));
        }
        if self.grid_size <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.canvas_margin < 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "canvas_margin must not be negative, got {}",
                self.canvas_margin
            )));
        }
        self.palette().map(|_| ())
    }

    pub fn palette(&self) -> ConfigResult<Palette> {
        self.palette
            .iter()
            .map(|entry| {
                color::parse_hex(&entry.color)
                    .map(|color| PaletteItem::new(color, entry.name.clone()))
                    .map_err(|source| ConfigError::InvalidColor {
                        name: entry.name.clone(),
                        source,
                    })
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Palette::new)
    }
}
