//! Linear RGBA color used by biome definitions and materials.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when parsing a color from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Hex strings must be `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    #[error("invalid hex color length {0}, expected 6 or 8 digits")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

/// RGBA color with `f32` components, nominally in `[0.0, 1.0]`.
///
/// Alpha defaults to `1.0` when omitted in data files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Fallback color for assets that failed to resolve.
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8-bit sRGB-style byte components (no gamma conversion).
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] on wrong length or non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::InvalidLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
        };
        let alpha = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    /// Copy with every component clamped to `[0.0, 1.0]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Whether every component is a finite number (no NaN or infinity).
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}
