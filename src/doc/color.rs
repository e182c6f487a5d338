use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color. Persisted as a `#rrggbb` hex string so draft records
/// keep the original color-field format.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Default ink color for poem text. #2C3E50
    pub const DEFAULT_FG: Rgb = Rgb::new(0x2C, 0x3E, 0x50);

    /// Default preview background. #F8F9FA
    pub const DEFAULT_BG: Rgb = Rgb::new(0xF8, 0xF9, 0xFA);

    // -- Swatch palettes offered in the control panel --

    pub const TEXT_SWATCHES: [Rgb; 8] = [
        Rgb::new(0x2C, 0x3E, 0x50), // slate (default)
        Rgb::new(0x00, 0x00, 0x00), // black
        Rgb::new(0xFF, 0xFF, 0xFF), // white
        Rgb::new(0x7F, 0x1D, 0x1D), // wine
        Rgb::new(0x1E, 0x3A, 0x8A), // navy
        Rgb::new(0x14, 0x53, 0x2D), // forest
        Rgb::new(0x6B, 0x21, 0xA8), // violet
        Rgb::new(0x92, 0x40, 0x0E), // sepia
    ];

    pub const BACKGROUND_SWATCHES: [Rgb; 8] = [
        Rgb::new(0xF8, 0xF9, 0xFA), // mist (default)
        Rgb::new(0xFF, 0xFF, 0xFF), // white
        Rgb::new(0xFF, 0xF8, 0xE7), // cream
        Rgb::new(0xFD, 0xF2, 0xF8), // blush
        Rgb::new(0xEF, 0xF6, 0xFF), // ice
        Rgb::new(0xEC, 0xFD, 0xF5), // mint
        Rgb::new(0x1F, 0x29, 0x37), // slate
        Rgb::new(0x11, 0x18, 0x27), // ink
    ];

    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parses a `#rrggbb` (or bare `rrggbb`) hex color.
    pub fn parse_hex(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgb::parse_hex(&raw).ok_or_else(|| D::Error::custom(format!("invalid color {raw:?}")))
    }
}
