// File: crates/rtchart-core/src/theme.rs
// Summary: Host-injected theme descriptor (accent, text, divider, dark flag) and the derived chart palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// 8-bit RGBA colour. Serialized as `#rrggbb` / `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Same colour with `opacity` in `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }

    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let t = s.trim();
        let digits = t.strip_prefix('#').ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        let nibble = |c: char| c.to_digit(16).map(|d| d as u8).ok_or_else(|| ColorError::BadDigit(s.to_string()));
        let chars = digits.chars().collect::<Vec<_>>();
        match chars.len() {
            3 | 4 => {
                let mut v = [255u8; 4];
                for (i, c) in chars.iter().enumerate() {
                    let n = nibble(*c)?;
                    v[i] = n << 4 | n;
                }
                Ok(Self::rgba(v[0], v[1], v[2], v[3]))
            }
            6 | 8 => {
                let mut v = [255u8; 4];
                for (i, pair) in chars.chunks(2).enumerate() {
                    v[i] = nibble(pair[0])? << 4 | nibble(pair[1])?;
                }
                Ok(Self::rgba(v[0], v[1], v[2], v[3]))
            }
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_hex(s) }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::from_hex(&s) }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self { c.to_string() }
}

/// Colours the host reads from its own styling layer and hands to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub primary: Rgba,
    pub text_secondary: Rgba,
    pub divider: Rgba,
    pub dark: bool,
}

impl ThemeDescriptor {
    pub fn light() -> Self {
        Self {
            primary: Rgba::rgb(0xff, 0x66, 0x99),
            text_secondary: Rgba::rgb(0x66, 0x66, 0x66),
            divider: Rgba::rgb(0xdd, 0xdd, 0xdd),
            dark: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Rgba::rgb(0xff, 0x66, 0x99),
            text_secondary: Rgba::rgb(0xa3, 0xa3, 0xa3),
            divider: Rgba::rgb(0x3a, 0x3a, 0x40),
            dark: true,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            primary: Rgba::rgb(0x00, 0xff, 0xff),
            text_secondary: Rgba::rgb(0xff, 0xff, 0xff),
            divider: Rgba::rgb(0x55, 0x55, 0x55),
            dark: true,
        }
    }
}

impl Default for ThemeDescriptor {
    fn default() -> Self { Self::light() }
}

/// Built-in presets by name.
pub fn presets() -> Vec<(&'static str, ThemeDescriptor)> {
    vec![
        ("light", ThemeDescriptor::light()),
        ("dark", ThemeDescriptor::dark()),
        ("high-contrast-dark", ThemeDescriptor::high_contrast_dark()),
    ]
}

/// Find a preset by name, falling back to light.
pub fn find(name: &str) -> ThemeDescriptor {
    presets()
        .into_iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, t)| t)
        .unwrap_or_else(ThemeDescriptor::light)
}

/// A vertical gradient stop; `offset` runs 0 (top) to 1 (bottom).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Every colour the draw list uses. Depends only on the theme descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub line: Rgba,
    pub area: Vec<GradientStop>,
    pub grid: Rgba,
    pub gap_fill: Rgba,
    pub axis_text: Rgba,
    pub marker: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
    pub tooltip_border: Rgba,
}

impl Palette {
    pub fn from_theme(theme: &ThemeDescriptor) -> Self {
        let (tooltip_background, tooltip_text) = if theme.dark {
            (Rgba::rgb(0x1f, 0x1f, 0x24), Rgba::rgb(0xee, 0xee, 0xf2))
        } else {
            (Rgba::rgb(0xff, 0xff, 0xff), Rgba::rgb(0x22, 0x22, 0x2a))
        };
        Self {
            line: theme.primary,
            area: vec![
                GradientStop { offset: 0.0, color: theme.primary.with_opacity(0.4) },
                GradientStop { offset: 0.9, color: theme.primary.with_opacity(0.1) },
                GradientStop { offset: 1.0, color: theme.primary.with_opacity(0.1) },
            ],
            grid: theme.divider,
            gap_fill: theme.divider.with_opacity(if theme.dark { 0.25 } else { 0.35 }),
            axis_text: theme.text_secondary,
            marker: theme.primary,
            tooltip_background,
            tooltip_text,
            tooltip_border: theme.divider,
        }
    }
}
