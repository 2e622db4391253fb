use crate::error::ColorParseError;
use egui::Color32;

/// Parse a `#rrggbb` string (case-insensitive) into an opaque color
pub fn parse_hex(text: &str) -> Result<Color32, ColorParseError> {
    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(text.to_string()))?;
    if digits.len() != 6 {
        return Err(ColorParseError::InvalidLength(text.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ColorParseError::InvalidDigit(text.to_string()))
    };

    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Lowercase `#rrggbb`, alpha is dropped
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
