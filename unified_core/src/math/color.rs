// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

/// A color in linear RGBA space with `f32` components.
///
/// Components are nominally in `0.0..=1.0`; values above `1.0` are allowed
/// for HDR use. Serde support exists so configuration files can name clear
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new color.
    ///
    /// ## Arguments
    /// * `r`, `g`, `b`, `a` - Components, nominally `0.0..=1.0`.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque color (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a color from a `#RRGGBB` or `#RRGGBBAA` hex string.
    ///
    /// ## Returns
    /// `None` if the string is not a well-formed hex color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let channel = |range| {
            hex.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|value| value as f32 / 255.0)
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if hex.len() == 8 { channel(6..8)? } else { 1.0 };
        Some(Self { r, g, b, a })
    }

    /// Formats this color as a `#RRGGBBAA` hex string, clamping components
    /// to the displayable range.
    pub fn to_hex(&self) -> String {
        let byte = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }

    /// Linearly interpolates towards `other` by `t` (unclamped).
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constants_are_opaque_except_transparent() {
        for color in [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE, Color::BLACK] {
            assert_relative_eq!(color.a, 1.0);
        }
        assert_relative_eq!(Color::TRANSPARENT.a, 0.0);
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn hex_round_trip() {
        let color = Color::from_hex("#FF8000").expect("valid hex should parse");
        assert_relative_eq!(color.r, 1.0);
        assert_relative_eq!(color.g, 128.0 / 255.0);
        assert_relative_eq!(color.b, 0.0);
        assert_relative_eq!(color.a, 1.0);
        assert_eq!(color.to_hex(), "#FF8000FF");

        let translucent = Color::from_hex("00FF0080").expect("8-digit hex should parse");
        assert_eq!(translucent.to_hex(), "#00FF0080");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("#123456789").is_none());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);

        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.g, 0.5);
        assert_relative_eq!(mid.b, 0.5);
        assert_relative_eq!(mid.a, 1.0);
    }

    #[test]
    fn serde_round_trip() {
        let color = Color::new(0.25, 0.5, 0.75, 1.0);
        let json = serde_json::to_string(&color).expect("serialize should succeed");
        let back: Color = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(back, color);
    }
}
