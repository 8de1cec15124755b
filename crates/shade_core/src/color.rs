use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color (sRGB, components in `0.0..=1.0`)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from `0xRRGGBBAA`
    pub fn from_hex_rgba(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is translucent
    pub fn to_hex_string(&self) -> String {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if self.a < 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", channel(self.a))
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_components() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn rgba_hex_reads_alpha_from_low_byte() {
        let c = Color::from_hex_rgba(0x000000FF);
        assert_eq!(c, Color::BLACK);

        let c = Color::from_hex_rgba(0xFFFFFF00);
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn hex_string_formatting() {
        assert_eq!(Color::from_hex(0xFFFAF0).to_hex_string(), "#fffaf0");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(
            Color::from_hex(0x47475B).with_alpha(0.5).to_hex_string(),
            "#47475b80"
        );
    }
}
