//! Fill colors.

use crate::ColorParseError;
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Graphviz `lightblue`, the fill of the lightest blocks.
    pub const LIGHT_BLUE: Self = Self::new(0xad, 0xd8, 0xe6);

    /// Graphviz `darkblue`, the fill of the heaviest blocks.
    pub const DARK_BLUE: Self = Self::new(0x00, 0x00, 0x8b);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolates between `low` (`ratio == 0.0`) and `high` (`ratio == 1.0`).
    ///
    /// Each channel is computed independently as `low + (high - low) * ratio` and truncated.
    pub fn lerp(low: Self, high: Self, ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let channel = |low: u8, high: u8| (f64::from(low) + (f64::from(high) - f64::from(low)) * ratio) as u8;
        Self::new(channel(low.r, high.r), channel(low.g, high.g), channel(low.b, high.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Min-max normalizes `value` into `[0.0, 1.0]`.
///
/// A degenerate range (`max <= min`) maps every value to `0.0`.
pub fn normalize(value: u128, min: u128, max: u128) -> f64 {
    if max <= min {
        return 0.0;
    }
    (value.saturating_sub(min) as f64 / (max - min) as f64).min(1.0)
}
