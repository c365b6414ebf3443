#![forbid(unsafe_code)]

//! Dark-mode resource view for Dusk.
//!
//! # Role in Dusk
//! `dusk-res` sits between a host resource system and the code that asks it
//! for colors. It wraps any [`ResourceResolver`] and, when dark mode is on,
//! softens every color it hands out with [`dusk_color::Desaturation`].
//!
//! # This crate provides
//! - [`DesaturatedResources`], the decorating resolver with its weak cache.
//! - [`ColorStateList`], [`StateMask`] and [`StateFlags`] for stateful colors.
//! - [`ResourceResolver`] and [`StateList`], the seams to the host system.
//! - [`ResourceTable`], an in-memory resolver.
//! - [`DarkModeSwitch`], which rebuilds the view when the mode flips.
//! - [`DarkModeConfig`] for construction-time settings.
//!
//! # How it fits in the system
//! Color lookups are scalar and cheap, so they are recomputed on every call.
//! Color state lists are desaturated once per identifier and kept in a
//! [`WeakCache`], which never keeps a list alive on its own: once every caller
//! drops it, the next lookup rebuilds it.

/// Weakly held per-identifier cache.
pub mod cache;
/// Construction-time settings.
pub mod config;
/// Error types.
pub mod error;
/// Color state lists and the extraction capability.
pub mod list;
/// The resolver capability and identifiers.
pub mod resolver;
/// The desaturating decorator.
pub mod resources;
/// State flags and masks.
pub mod state;
/// Dark-mode switch that swaps resource views.
pub mod switch;
/// In-memory resolver.
pub mod table;

pub use cache::{CacheStats, WeakCache};
pub use config::DarkModeConfig;
pub use error::{ConfigError, ExtractError, ResourceError};
pub use list::{ColorStateList, StateList};
pub use resolver::{ResourceId, ResourceResolver};
pub use resources::DesaturatedResources;
pub use state::{StateFlags, StateMask};
pub use switch::{DarkModeSwitch, SharedView};
pub use table::{ResourceTable, ThemeOverlay};
