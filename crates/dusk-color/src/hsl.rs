#![forbid(unsafe_code)]

//! Hue/saturation/lightness model.
//!
//! Uses the hexcone definition: hue in degrees `[0, 360)`, saturation and
//! lightness in `[0, 1]`. Channels are rounded half-up when converting back,
//! which makes `rgb -> hsl -> rgb` exact for every 8-bit color.
//!
//! Alpha is not part of the model. Callers that care about it strip it before
//! converting and restore it afterwards (see [`crate::desaturate`]).

use crate::argb::Argb;

/// An HSL triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f32,
    /// Saturation, `[0, 1]`.
    pub s: f32,
    /// Lightness, `[0, 1]`.
    pub l: f32,
}

impl Hsl {
    /// Build an HSL triple, normalizing each component into range.
    ///
    /// Hue wraps around; saturation and lightness are clamped. NaN components
    /// become zero.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
        Self {
            h,
            s: clamp01(s),
            l: clamp01(l),
        }
    }
}

#[inline]
fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn channel(v: f32) -> u8 {
    // Round half-up, then saturate. `as u8` maps NaN to 0.
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

impl Argb {
    /// Convert the RGB channels to HSL. Alpha is ignored.
    pub fn to_hsl(self) -> Hsl {
        let r = f32::from(self.r()) / 255.0;
        let g = f32::from(self.g()) / 255.0;
        let b = f32::from(self.b()) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (mut h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let h = if max == r {
                ((g - b) / delta) % 6.0
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h, delta / (1.0 - (2.0 * l - 1.0).abs()))
        };

        h = (h * 60.0) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }

        Hsl {
            h: h.clamp(0.0, 360.0),
            s: clamp01(s),
            l: clamp01(l),
        }
    }

    /// Build an opaque color from HSL.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = Hsl::new(hsl.h, hsl.s, hsl.l);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let m = l - 0.5 * c;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c + m, x + m, m),
            1 => (x + m, c + m, m),
            2 => (m, c + m, x + m),
            3 => (m, x + m, c + m),
            4 => (x + m, m, c + m),
            _ => (c + m, m, x + m),
        };

        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl From<Argb> for Hsl {
    fn from(color: Argb) -> Self {
        color.to_hsl()
    }
}

impl From<Hsl> for Argb {
    fn from(hsl: Hsl) -> Self {
        Argb::from_hsl(hsl)
    }
}
