use crate::color;
use egui::Color32;

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteItem {
    pub color: Color32,
    pub name: String,
}

impl PaletteItem {
    pub fn new(color: Color32, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }
}

const DEFAULT_COLORS: [(&str, Color32); 12] = [
    ("Black", Color32::from_rgb(0x00, 0x00, 0x00)),
    ("White", Color32::from_rgb(0xff, 0xff, 0xff)),
    ("Red", Color32::from_rgb(0xef, 0x44, 0x44)),
    ("Orange", Color32::from_rgb(0xf9, 0x73, 0x16)),
    ("Yellow", Color32::from_rgb(0xea, 0xb3, 0x08)),
    ("Green", Color32::from_rgb(0x22, 0xc5, 0x5e)),
    ("Blue", Color32::from_rgb(0x3b, 0x82, 0xf6)),
    ("Purple", Color32::from_rgb(0x8b, 0x5c, 0xf6)),
    ("Pink", Color32::from_rgb(0xec, 0x48, 0x99)),
    ("Gray", Color32::from_rgb(0x78, 0x71, 0x6c)),
    ("Brown", Color32::from_rgb(0xa1, 0x62, 0x07)),
    ("Indigo", Color32::from_rgb(0x63, 0x66, 0xf1)),
];

/// Ordered list of selectable colors. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    items: Vec<PaletteItem>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            DEFAULT_COLORS
                .iter()
                .map(|(name, color)| PaletteItem::new(*color, *name))
                .collect(),
        )
    }
}

impl Palette {
    pub fn new(items: Vec<PaletteItem>) -> Self {
        Self { items }
    }

    /// Append a color. Without a name (or with an empty one) the hex form is used.
    pub fn add(&mut self, color: Color32, name: Option<&str>) {
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => color::to_hex(color),
        };
        self.items.push(PaletteItem::new(color, name));
    }

    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.items()[0], PaletteItem::new(Color32::BLACK, "Black"));
        assert_eq!(palette.items()[1].color, Color32::WHITE);
        assert_eq!(palette.items()[11].name, "Indigo");
    }

    #[test]
    fn test_add_uses_hex_when_unnamed() {
        let mut palette = Palette::new(Vec::new());
        palette.add(Color32::from_rgb(0x12, 0x34, 0x56), None);
        palette.add(Color32::from_rgb(0x12, 0x34, 0x56), Some(""));
        palette.add(Color32::RED, Some("Fire"));

        assert_eq!(palette.items()[0].name, "#123456");
        assert_eq!(palette.items()[1].name, "#123456");
        assert_eq!(palette.items()[2].name, "Fire");
    }
}
