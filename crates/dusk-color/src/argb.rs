#![forbid(unsafe_code)]

//! Packed 32-bit ARGB color.
//!
//! The layout is `0xAARRGGBB`, the same ordering resource systems use for
//! integer color literals, so values can be passed through untouched.
//!
//! # Example
//!
//! ```
//! use dusk_color::Argb;
//!
//! let c = Argb::argb(0x80, 255, 0, 0);
//! assert_eq!(c.a(), 0x80);
//! assert_eq!(c.to_u32(), 0x80FF_0000);
//! assert_eq!(c.with_alpha(255), Argb::RED);
//! ```

use std::fmt;

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Argb(u32);

impl Argb {
    /// Canonical transparent black (`0x00000000`).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Wrap a raw `0xAARRGGBB` value.
    #[inline]
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw)
    }

    /// Build a color from individual channels.
    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// The raw packed value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Replace the alpha channel, keeping RGB bits untouched.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((a as u32) << 24))
    }

    /// Same RGB with alpha forced to 255.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// True when the alpha channel is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}

impl From<u32> for Argb {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = Argb::argb(12, 34, 56, 78);
        assert_eq!(c.a(), 12);
        assert_eq!(c.r(), 34);
        assert_eq!(c.g(), 56);
        assert_eq!(c.b(), 78);
    }

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Argb::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn packed_layout_is_aarrggbb() {
        assert_eq!(Argb::argb(0xAA, 0xBB, 0xCC, 0xDD).to_u32(), 0xAABB_CCDD);
        assert_eq!(Argb::from_u32(0xFF00_FF00), Argb::GREEN);
    }

    #[test]
    fn with_alpha_keeps_rgb_bits() {
        let c = Argb::from_u32(0x12_345678);
        let swapped = c.with_alpha(0xFE);
        assert_eq!(swapped.to_u32(), 0xFE_345678);
        assert_eq!(swapped.with_alpha(0x12), c);
    }

    #[test]
    fn transparent_detection() {
        assert!(Argb::TRANSPARENT.is_transparent());
        assert!(Argb::argb(0, 255, 255, 255).is_transparent());
        assert!(!Argb::argb(1, 0, 0, 0).is_transparent());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Argb::RED.to_string(), "#FFFF0000");
        assert_eq!(format!("{:?}", Argb::TRANSPARENT), "Argb(#00000000)");
    }

    #[test]
    fn u32_conversions() {
        let raw: u32 = Argb::BLUE.into();
        assert_eq!(raw, 0xFF00_00FF);
        assert_eq!(Argb::from(raw), Argb::BLUE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_transparent_u32() {
        let json = serde_json::to_string(&Argb::RED).unwrap();
        assert_eq!(json, "4294901760");
        let back: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Argb::RED);
    }
}
