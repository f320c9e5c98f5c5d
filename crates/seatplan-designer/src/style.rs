//! Seat colors and visual style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid color '{0}': expected #RRGGBB")]
pub struct ColorParseError(pub String);

/// RGBA color. Renders as `#RRGGBB` when opaque and `rgba(r, g, b, a)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    /// Opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same color with the given opacity, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(body) = s.strip_prefix("rgba(").and_then(|rest| rest.strip_suffix(')')) {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            let err = || ColorParseError(s.to_string());
            if parts.len() != 4 {
                return Err(err());
            }
            let channel = |p: &str| {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(err());
                }
                p.parse::<u8>().map_err(|_| err())
            };
            let alpha = parts[3]
                .parse::<f64>()
                .ok()
                .filter(|a| (0.0..=1.0).contains(a))
                .ok_or_else(err)?;
            return Ok(Self::rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?)
                .with_alpha(alpha));
        }
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Default seat fill.
pub const SEAT_GREEN: Color = Color::rgb(0x4C, 0xAF, 0x50);

/// Fixed visual style of a seat token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatStyle {
    pub fill: Color,
    pub label_color: Color,
    pub font_size: f64,
    pub corner_radius: f64,
}

impl SeatStyle {
    /// Same style with a different fill.
    pub fn with_fill(&self, fill: Color) -> Self {
        Self {
            fill,
            ..self.clone()
        }
    }
}

impl Default for SeatStyle {
    fn default() -> Self {
        Self {
            fill: SEAT_GREEN,
            label_color: Color::rgb(0xFF, 0xFF, 0xFF),
            font_size: 14.0,
            corner_radius: 5.0,
        }
    }
}
