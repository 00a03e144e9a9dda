//! Pen style and color handling.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style input errors.
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),
    #[error("stroke width must be positive and finite, got {0}")]
    InvalidWidth(f64),
}

/// Serializable color representation (RGBA8).
///
/// The single place where colors cross the string boundary: parsing accepts
/// `#RGB`, `#RRGGBB`, and `#RRGGBBAA`; formatting always emits the canonical
/// uppercase `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Unpack from a `0xRRGGBBAA` value.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    /// Pack into a `0xRRGGBBAA` value.
    pub fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Parse a hex color string (`#RGB`, `#RRGGBB`, or `#RRGGBBAA`).
    pub fn from_hex(s: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let nibble = |i| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, 255))
            }
            6 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
            8 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(invalid()),
        }
    }

    /// Canonical 6-hex-digit form, alpha omitted.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Pen style for one stroke: color and width.
///
/// A committed stroke keeps its own copy, so the surface's current pen keeps
/// carrying the last-used style into the next stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    color: Rgba,
    width: f64,
}

impl Pen {
    pub const DEFAULT_WIDTH: f64 = 2.0;

    /// Create a pen. Width must be positive and finite.
    pub fn new(color: Rgba, width: f64) -> Result<Self, StyleError> {
        validate_width(width)?;
        Ok(Self { color, width })
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Stroke color as a peniko Color for the renderer.
    pub fn stroke(&self) -> Color {
        self.color.into()
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), StyleError> {
        validate_width(width)?;
        self.width = width;
        Ok(())
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Rgba::black(),
            width: Self::DEFAULT_WIDTH,
        }
    }
}

fn validate_width(width: f64) -> Result<(), StyleError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidWidth(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Rgba::from_hex("#1a2B3c").unwrap();
        assert_eq!(color, Rgba::new(0x1A, 0x2B, 0x3C, 255));
        assert_eq!(color.to_hex(), "#1A2B3C");
    }

    #[test]
    fn test_hex_short_form() {
        assert_eq!(Rgba::from_hex("#f0a").unwrap(), Rgba::new(255, 0, 170, 255));
    }

    #[test]
    fn test_hex_with_alpha() {
        let color = Rgba::from_hex("#FF000080").unwrap();
        assert_eq!(color, Rgba::new(255, 0, 0, 0x80));
        // Canonical form drops alpha
        assert_eq!(color.to_hex(), "#FF0000");
    }

    #[test]
    fn test_hex_invalid() {
        for s in ["red", "#12345", "#GGHHII", "", "#"] {
            assert_eq!(
                Rgba::from_hex(s),
                Err(StyleError::InvalidColor(s.to_string()))
            );
        }
    }

    #[test]
    fn test_packed_round_trip() {
        let color = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_packed(), 0x12345678);
        assert_eq!(Rgba::from_packed(0x12345678), color);
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = Rgba::new(10, 20, 30, 255).into();
        let back: Rgba = color.into();
        assert_eq!(back, Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn test_pen_width_validation() {
        assert!(Pen::new(Rgba::black(), 4.0).is_ok());
        assert_eq!(
            Pen::new(Rgba::black(), 0.0),
            Err(StyleError::InvalidWidth(0.0))
        );
        assert_eq!(
            Pen::new(Rgba::black(), -1.5),
            Err(StyleError::InvalidWidth(-1.5))
        );
        assert!(Pen::new(Rgba::black(), f64::NAN).is_err());

        let mut pen = Pen::default();
        assert!(pen.set_width(-2.0).is_err());
        assert!((pen.width() - Pen::DEFAULT_WIDTH).abs() < f64::EPSILON);
    }
}
