//! RGBA colors for segment styling.
//!
//! [`Rgba`] stores floating-point components so state alpha (dimmed
//! labels, translucent highlight backgrounds) can be composited before a
//! frame is written out as true color or 256-color escapes.
//!
//! # Examples
//!
//! ```
//! use segstrip::Rgba;
//!
//! let coral = Rgba::from_hex("#F25C54").unwrap();
//! let dimmed = coral.multiply_alpha(0.5).blend_over(Rgba::WHITE);
//! assert!(dimmed.is_opaque());
//! ```

use crate::error::Error;
use std::str::FromStr;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red (default badge color).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque orange (default indicator color).
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    /// One-third gray (default separator color).
    pub const DARK_GRAY: Self = Self::rgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
    /// Two-thirds gray (default control background).
    pub const LIGHT_GRAY: Self = Self::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::from_rgba_u8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Blend this color over another using Porter-Duff "over".
    #[must_use]
    pub fn blend_over(self, other: Self) -> Self {
        const ALPHA_EPSILON: f32 = 1e-6;

        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return other;
        }

        let inv_alpha = 1.0 - self.a;
        let out_a = other.a.mul_add(inv_alpha, self.a);
        if out_a <= ALPHA_EPSILON {
            return Self::TRANSPARENT;
        }

        Self {
            r: (other.r * other.a).mul_add(inv_alpha, self.r * self.a) / out_a,
            g: (other.g * other.a).mul_add(inv_alpha, self.g * self.a) / out_a,
            b: (other.b * other.a).mul_add(inv_alpha, self.b * self.a) / out_a,
            a: out_a,
        }
    }

    /// Return the color with a replaced alpha component.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Scale the alpha component (state alpha of a segment label).
    #[must_use]
    pub fn multiply_alpha(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to u8 RGB components.
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Check if the color is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Check if the color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Nearest index in the xterm 256-color palette.
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = self.to_rgb_u8();

        let gray = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
        let is_grayscale = (i16::from(r) - i16::from(gray)).abs() < 10
            && (i16::from(g) - i16::from(gray)).abs() < 10
            && (i16::from(b) - i16::from(gray)).abs() < 10;

        if is_grayscale {
            // 232-255: 24 gray levels
            let gray_idx = (u16::from(gray) * 24 / 256) as u8;
            return 232 + gray_idx.min(23);
        }

        // 16-231: 6x6x6 cube
        16 + 36 * nearest_cube_index(r) + 6 * nearest_cube_index(g) + nearest_cube_index(b)
    }
}

fn nearest_cube_index(value: u8) -> u8 {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    let mut best = 0u8;
    let mut best_distance = u8::MAX;
    for (idx, level) in LEVELS.iter().enumerate() {
        let distance = value.abs_diff(*level);
        if distance < best_distance {
            best_distance = distance;
            best = idx as u8;
        }
    }
    best
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}
