use thiserror::Error;

/// Errors from reading a `#rrggbb` color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),

    #[error("color {0:?} must have 6 hex digits")]
    InvalidLength(String),

    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// Errors from loading the board configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid palette color for {name:?}: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ColorParseError,
    },

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
