use std::{path::Path, str::FromStr};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgb8,
    error::{RainbowError, RainbowResult},
};

/// Number of color pickers feeding the rainbow cycle.
pub const GRADIENT_LEN: usize = 7;

pub const DEFAULT_COLORS: [Rgb8; GRADIENT_LEN] = [
    Rgb8::new(0xff, 0x00, 0x00),
    Rgb8::new(0xff, 0x7f, 0x00),
    Rgb8::new(0xff, 0xff, 0x00),
    Rgb8::new(0x00, 0xff, 0x00),
    Rgb8::new(0x00, 0x00, 0xff),
    Rgb8::new(0x4b, 0x00, 0x82),
    Rgb8::new(0x94, 0x00, 0xd3),
];

/// Parse a `#rrggbb` color (the leading `#` is optional, hex digits are case-insensitive).
pub fn parse_hex_color(s: &str) -> RainbowResult<Rgb8> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> RainbowResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| RainbowError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RainbowError::validation(format!(
            "color \"{s}\" must be #RRGGBB (case-insensitive)"
        )));
    }

    Ok(Rgb8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
    ))
}

/// The ordered set of exactly seven colors the background cycles through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientColors([Rgb8; GRADIENT_LEN]);

impl GradientColors {
    pub const fn new(colors: [Rgb8; GRADIENT_LEN]) -> Self {
        Self(colors)
    }

    pub fn from_slice(colors: &[Rgb8]) -> RainbowResult<Self> {
        let arr: [Rgb8; GRADIENT_LEN] = colors.try_into().map_err(|_| {
            RainbowError::validation(format!(
                "expected exactly {GRADIENT_LEN} gradient colors, got {}",
                colors.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn parse<S: AsRef<str>>(values: &[S]) -> RainbowResult<Self> {
        let colors = values
            .iter()
            .map(|v| parse_hex_color(v.as_ref()))
            .collect::<RainbowResult<Vec<_>>>()?;
        Self::from_slice(&colors)
    }

    pub fn colors(&self) -> &[Rgb8; GRADIENT_LEN] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.0.get(index).copied()
    }

    /// Replace one picker's value.
    pub fn set(&mut self, index: usize, color: Rgb8) -> RainbowResult<()> {
        let slot = self.0.get_mut(index).ok_or_else(|| {
            RainbowError::validation(format!(
                "color index {index} out of range (0..{GRADIENT_LEN})"
            ))
        })?;
        *slot = color;
        Ok(())
    }
}

impl Default for GradientColors {
    fn default() -> Self {
        Self(DEFAULT_COLORS)
    }
}

/// Comma-separated list, e.g. `#ff0000,#ff7f00,...`.
impl FromStr for GradientColors {
    type Err = RainbowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        Self::parse(&parts)
    }
}

impl Serialize for GradientColors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let hex: Vec<String> = self.0.iter().map(|c| c.to_hex()).collect();
        hex.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GradientColors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<String>::deserialize(deserializer)?;
        Self::parse(&values).map_err(serde::de::Error::custom)
    }
}

/// On-disk palette: `{ "colors": ["#rrggbb", ...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: GradientColors,
}

impl Palette {
    pub fn from_json(json: &str) -> RainbowResult<Self> {
        serde_json::from_str(json).map_err(|e| RainbowError::validation(format!("palette: {e}")))
    }

    pub fn load(path: &Path) -> RainbowResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read palette '{}'", path.display()))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
