//! Level colour palette

use serde::{Deserialize, Serialize};

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation (`#rrggbb`)
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Level colours, also used for block tints
pub const LEVEL_COLORS: [Color; 12] = [
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0x80, 0x00),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0x80, 0xff, 0x00),
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0x00, 0xff, 0x80),
    Color::rgb(0x00, 0xff, 0xff),
    Color::rgb(0x00, 0x80, 0xff),
    Color::rgb(0x00, 0x00, 0xff),
    Color::rgb(0x80, 0x00, 0xff),
    Color::rgb(0xff, 0x00, 0xff),
    Color::rgb(0xff, 0x00, 0x80),
];

/// Fixed colours outside the level palette
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const HUD_TEXT: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const LEVEL_BAR_TRACK: Color = Color::rgb(0x33, 0x33, 0x33);
}

/// Palette entry for a 0-based index; indices past the end wrap around
pub fn palette_color(index: usize) -> Color {
    LEVEL_COLORS[index % LEVEL_COLORS.len()]
}

/// Ambient colour for a 1-based level
pub fn level_color(level: u32) -> Color {
    palette_color(level.saturating_sub(1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(LEVEL_COLORS[1].to_css(), "#ff8000");
        assert_eq!(colors::LEVEL_BAR_TRACK.to_css(), "#333333");
    }

    #[test]
    fn test_level_color_wraps_past_palette() {
        assert_eq!(level_color(1), LEVEL_COLORS[0]);
        assert_eq!(level_color(12), LEVEL_COLORS[11]);
        assert_eq!(level_color(13), LEVEL_COLORS[0]);
        assert_eq!(level_color(26), LEVEL_COLORS[1]);
    }
}
