#![forbid(unsafe_code)]

//! Color primitives for Dusk.
//!
//! # Role in Dusk
//! `dusk-color` is the leaf of the workspace. It knows nothing about resources,
//! themes, or caches: it only turns one color into another.
//!
//! # This crate provides
//! - [`Argb`], a packed 32-bit color with lossless channel access.
//! - [`Hsl`], the hue/saturation/lightness view of an opaque color.
//! - [`Desaturation`] and [`desaturate`], the dark-mode saturation clamp.
//!
//! # How it fits in the system
//! `dusk-res` runs every color it hands out in dark mode through
//! [`Desaturation::apply`]. Keeping the transform here makes it deterministic
//! and testable without any resource plumbing.

/// Packed ARGB color type.
pub mod argb;
/// Saturation clamping for dark mode.
pub mod desaturate;
/// HSL color model and conversions.
pub mod hsl;

pub use argb::Argb;
pub use desaturate::{
    DEFAULT_DESATURATION_AMOUNT, DEFAULT_DESATURATION_THRESHOLD, Desaturation, desaturate,
};
pub use hsl::Hsl;
