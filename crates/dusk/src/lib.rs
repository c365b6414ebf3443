#![forbid(unsafe_code)]

//! Dusk: dark-mode color desaturation for resource lookups.
//!
//! This crate re-exports the workspace crates and offers a [`prelude`].
//!
//! # Quick start
//!
//! ```
//! use dusk::prelude::*;
//!
//! let accent = ResourceId(0x7f06_0001);
//! let table = ResourceTable::new().with_color(accent, Argb::RED);
//!
//! let light = DesaturatedResources::with_defaults(table.clone(), false);
//! let night = DesaturatedResources::with_defaults(table, true);
//!
//! assert_eq!(light.get_color(accent).unwrap(), Argb::RED);
//! assert_eq!(night.get_color(accent).unwrap(), Argb::rgb(223, 32, 32));
//! ```

pub use dusk_color as color;
pub use dusk_res as res;

pub use dusk_color::{Argb, Desaturation, Hsl, desaturate};
pub use dusk_res::{
    CacheStats, ColorStateList, ConfigError, DarkModeConfig, DarkModeSwitch,
    DesaturatedResources, ExtractError, ResourceError, ResourceId, ResourceResolver,
    ResourceTable, StateFlags, StateList, StateMask, ThemeOverlay,
};

/// Everything needed to wrap a resolver and look colors up.
pub mod prelude {
    pub use dusk_color::{Argb, Desaturation, Hsl, desaturate};
    pub use dusk_res::{
        ColorStateList, DarkModeConfig, DarkModeSwitch, DesaturatedResources, ResourceId,
        ResourceResolver, ResourceTable, StateFlags, StateList, StateMask, ThemeOverlay,
    };
}
