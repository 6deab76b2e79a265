//! Minimal RGBA color value shared by strokes, fills, and the glow halo.

use serde::{Deserialize, Serialize};

/// An RGBA color with `0.0..=1.0` channels.
///
/// The graphic applies a single color uniformly, so this type stays
/// deliberately small: a hex parser for the common authoring path and an
/// alpha override for the glow, nothing more.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// The default robot color, `#00FF00`.
    pub const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex string (leading `#` optional).
    ///
    /// Returns `None` for anything else; malformed input is skipped by
    /// callers rather than reported.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(hex.get(i..i + 2)?, 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        match hex.len() {
            6 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Returns this color with its alpha channel replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::GREEN
    }
}
