#![forbid(unsafe_code)]

//! Saturation clamping for dark mode.
//!
//! Strongly saturated colors vibrate against dark backgrounds. [`Desaturation`]
//! pulls saturation down by a fixed `amount`, but never below `threshold`, and
//! leaves colors that are already at or below the threshold alone.
//!
//! # Example
//!
//! ```
//! use dusk_color::{Argb, Desaturation};
//!
//! let d = Desaturation::new(0.25, 0.75);
//! let softened = d.apply(Argb::RED);
//! assert!((softened.to_hsl().s - 0.75).abs() < 0.01);
//! assert_eq!(softened.a(), 255);
//!
//! // Already muted: untouched.
//! let muted = Argb::rgb(140, 120, 110);
//! assert_eq!(d.apply(muted), muted);
//! ```

use crate::argb::Argb;
use crate::hsl::Hsl;

/// Default saturation removed from colors above the threshold.
pub const DEFAULT_DESATURATION_AMOUNT: f32 = 0.25;
/// Default saturation threshold and floor.
pub const DEFAULT_DESATURATION_THRESHOLD: f32 = 0.75;

/// Desaturation parameters.
///
/// Both values live in `[0, 1]`. The constructor clamps out-of-range input,
/// maps a NaN amount to `0` and a NaN threshold to `1`, so a bad value can only
/// ever disable the effect, never panic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawDesaturation", into = "RawDesaturation"))]
pub struct Desaturation {
    amount: f32,
    threshold: f32,
}

impl Desaturation {
    /// Create parameters, clamping both into `[0, 1]`.
    pub fn new(amount: f32, threshold: f32) -> Self {
        let amount = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
        let threshold = if threshold.is_nan() {
            1.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { amount, threshold }
    }

    /// Saturation removed from colors above the threshold.
    #[inline]
    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Minimum saturation that triggers the effect, and floor of its output.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Apply the clamp to an HSL triple.
    ///
    /// Output saturation is in `[threshold, 1]` whenever input saturation was
    /// above the threshold; otherwise the triple is returned as is.
    pub fn apply_hsl(&self, hsl: Hsl) -> Hsl {
        if hsl.s <= self.threshold {
            return hsl;
        }
        Hsl {
            s: (hsl.s - self.amount).clamp(self.threshold, 1.0),
            ..hsl
        }
    }

    /// Desaturate one color, preserving its alpha channel.
    pub fn apply(&self, color: Argb) -> Argb {
        if color == Argb::TRANSPARENT || color.is_transparent() {
            return color;
        }

        let alpha = color.a();
        let hsl = color.opaque().to_hsl();
        if hsl.s <= self.threshold {
            // Fixed point: skip the lossy trip back through floating point.
            return color;
        }

        Argb::from_hsl(self.apply_hsl(hsl)).with_alpha(alpha)
    }

    /// Desaturate every color of a slice in place.
    pub fn apply_all(&self, colors: &mut [Argb]) {
        for color in colors {
            *color = self.apply(*color);
        }
    }
}

impl Default for Desaturation {
    fn default() -> Self {
        Self {
            amount: DEFAULT_DESATURATION_AMOUNT,
            threshold: DEFAULT_DESATURATION_THRESHOLD,
        }
    }
}

/// Desaturate `color` by `amount`, never going below `threshold`.
///
/// Shorthand for `Desaturation::new(amount, threshold).apply(color)`.
pub fn desaturate(color: Argb, amount: f32, threshold: f32) -> Argb {
    Desaturation::new(amount, threshold).apply(color)
}

/// Wire shape for serde; goes through [`Desaturation::new`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDesaturation {
    amount: f32,
    threshold: f32,
}

#[cfg(feature = "serde")]
impl From<RawDesaturation> for Desaturation {
    fn from(raw: RawDesaturation) -> Self {
        Self::new(raw.amount, raw.threshold)
    }
}

#[cfg(feature = "serde")]
impl From<Desaturation> for RawDesaturation {
    fn from(d: Desaturation) -> Self {
        Self {
            amount: d.amount,
            threshold: d.threshold,
        }
    }
}
