#![forbid(unsafe_code)]

//! Dark-mode switch.
//!
//! A [`DesaturatedResources`] view fixes its parameters for life, so flipping
//! dark mode means building a new view with a fresh cache. `DarkModeSwitch`
//! owns the base resolver and publishes the current view through
//! [`arc_swap::ArcSwap`]: lookups load the view without locking, and a flip
//! swaps in a replacement atomically. Readers holding the old view keep using
//! it until they drop it.
//!
//! # Example
//!
//! ```
//! use dusk_color::Argb;
//! use dusk_res::{DarkModeConfig, DarkModeSwitch, ResourceId, ResourceResolver, ResourceTable};
//!
//! let accent = ResourceId(1);
//! let table = ResourceTable::new().with_color(accent, Argb::RED);
//! let switch = DarkModeSwitch::new(table, &DarkModeConfig::default());
//!
//! assert_eq!(switch.resolve_color(accent, None).unwrap(), Argb::RED);
//! assert!(switch.toggle());
//! assert_eq!(switch.resolve_color(accent, None).unwrap(), Argb::rgb(223, 32, 32));
//! ```

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use dusk_color::{Argb, Desaturation};

use crate::config::DarkModeConfig;
use crate::error::ResourceError;
use crate::resolver::{ResourceId, ResourceResolver};
use crate::resources::DesaturatedResources;

/// The view type a [`DarkModeSwitch`] publishes.
pub type SharedView<R> = DesaturatedResources<Arc<R>>;

/// Publishes a [`DesaturatedResources`] view and rebuilds it on mode changes.
pub struct DarkModeSwitch<R: ResourceResolver> {
    base: Arc<R>,
    desaturation: Desaturation,
    current: ArcSwap<SharedView<R>>,
}

impl<R: ResourceResolver> DarkModeSwitch<R> {
    /// Take ownership of `base` and build the initial view from `config`.
    pub fn new(base: R, config: &DarkModeConfig) -> Self {
        Self::from_arc(Arc::new(base), config)
    }

    /// Share an existing resolver.
    pub fn from_arc(base: Arc<R>, config: &DarkModeConfig) -> Self {
        let desaturation = config.desaturation();
        let view = DesaturatedResources::new(Arc::clone(&base), config.dark_mode, desaturation);
        Self {
            base,
            desaturation,
            current: ArcSwap::from_pointee(view),
        }
    }

    fn build(&self, dark_mode: bool) -> SharedView<R> {
        DesaturatedResources::new(Arc::clone(&self.base), dark_mode, self.desaturation)
    }

    /// The view currently published.
    pub fn view(&self) -> Arc<SharedView<R>> {
        self.current.load_full()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.current.load().is_dark_mode()
    }

    pub fn base(&self) -> &Arc<R> {
        &self.base
    }

    /// Switch dark mode on or off. Returns `true` if the view was rebuilt.
    pub fn set_dark_mode(&self, dark_mode: bool) -> bool {
        let mut rebuilt = false;
        self.current.rcu(|current| {
            rebuilt = current.is_dark_mode() != dark_mode;
            if rebuilt {
                Arc::new(self.build(dark_mode))
            } else {
                Arc::clone(current)
            }
        });
        if rebuilt {
            tracing::debug!(dark_mode, "dark mode view rebuilt");
        }
        rebuilt
    }

    /// Flip dark mode. Returns the new state.
    pub fn toggle(&self) -> bool {
        let previous = self
            .current
            .rcu(|current| Arc::new(self.build(!current.is_dark_mode())));
        let dark_mode = !previous.is_dark_mode();
        tracing::debug!(dark_mode, "dark mode view rebuilt");
        dark_mode
    }
}

impl<R: ResourceResolver> ResourceResolver for DarkModeSwitch<R> {
    type Theme = R::Theme;
    type List = R::List;

    fn resolve_color(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Argb, ResourceError> {
        self.current.load().get_color_themed(id, theme)
    }

    fn resolve_color_state_list(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Arc<Self::List>, ResourceError> {
        self.current.load().get_color_state_list_themed(id, theme)
    }
}

impl<R: ResourceResolver> fmt::Debug for DarkModeSwitch<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DarkModeSwitch")
            .field("dark_mode", &self.is_dark_mode())
            .field("desaturation", &self.desaturation)
            .finish_non_exhaustive()
    }
}
