#![forbid(unsafe_code)]

//! Desaturating resource view.
//!
//! [`DesaturatedResources`] wraps a [`ResourceResolver`] and, in dark mode,
//! desaturates everything it returns:
//!
//! - Colors are resolved and desaturated on every call. The transform is a
//!   handful of float operations, so there is nothing worth caching.
//! - Color state lists are taken apart, desaturated row by row and rebuilt
//!   once per identifier. The result is kept in a [`WeakCache`] and shared by
//!   every caller until the last of them drops it.
//!
//! With dark mode off the view forwards both lookups untouched.
//!
//! Desaturation is best effort. If a list cannot be taken apart or rebuilt,
//! the failure is logged and the raw list is returned. Lookup errors from the
//! wrapped resolver are returned as is.
//!
//! # Example
//!
//! ```
//! use dusk_color::Argb;
//! use dusk_res::{DesaturatedResources, ResourceId, ResourceTable};
//!
//! let accent = ResourceId(1);
//! let table = ResourceTable::new().with_color(accent, Argb::RED);
//! let night = DesaturatedResources::with_defaults(table, true);
//!
//! assert_eq!(night.get_color(accent).unwrap(), Argb::rgb(223, 32, 32));
//! ```

use std::fmt;
use std::sync::Arc;

use dusk_color::{Argb, Desaturation};

use crate::cache::{CacheStats, WeakCache};
use crate::config::DarkModeConfig;
use crate::error::{ExtractError, ResourceError};
use crate::list::StateList;
use crate::resolver::{ResourceId, ResourceResolver};

/// A resource view that desaturates colors in dark mode.
pub struct DesaturatedResources<R: ResourceResolver> {
    inner: R,
    dark_mode: bool,
    desaturation: Desaturation,
    cache: WeakCache<ResourceId, R::List>,
}

impl<R: ResourceResolver> DesaturatedResources<R> {
    /// Wrap `inner` with explicit parameters.
    ///
    /// Parameters are fixed for the life of the view; cached lists are never
    /// invalidated.
    pub fn new(inner: R, dark_mode: bool, desaturation: Desaturation) -> Self {
        Self {
            inner,
            dark_mode,
            desaturation,
            cache: WeakCache::new(),
        }
    }

    /// Wrap `inner` with the default amount and threshold.
    pub fn with_defaults(inner: R, dark_mode: bool) -> Self {
        Self::new(inner, dark_mode, Desaturation::default())
    }

    /// Wrap `inner` using a loaded configuration.
    pub fn from_config(inner: R, config: &DarkModeConfig) -> Self {
        Self::new(inner, config.dark_mode, config.desaturation())
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn desaturation(&self) -> Desaturation {
        self.desaturation
    }

    /// The wrapped resolver, for lookups this view does not intercept.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Desaturated lists currently alive.
    pub fn live_entries(&self) -> usize {
        self.cache.live_len()
    }

    /// Resolve a color without a theme.
    pub fn get_color(&self, id: ResourceId) -> Result<Argb, ResourceError> {
        self.get_color_themed(id, None)
    }

    /// Resolve a color, desaturating it in dark mode.
    pub fn get_color_themed(
        &self,
        id: ResourceId,
        theme: Option<&R::Theme>,
    ) -> Result<Argb, ResourceError> {
        let color = self.inner.resolve_color(id, theme)?;
        if !self.dark_mode {
            return Ok(color);
        }
        Ok(self.desaturation.apply(color))
    }

    /// Resolve a color state list without a theme.
    pub fn get_color_state_list(&self, id: ResourceId) -> Result<Arc<R::List>, ResourceError> {
        self.get_color_state_list_themed(id, None)
    }

    /// Resolve a color state list, desaturating and caching it in dark mode.
    ///
    /// The cache is keyed by `id` alone; the theme only matters for the lookup
    /// that populates an entry.
    pub fn get_color_state_list_themed(
        &self,
        id: ResourceId,
        theme: Option<&R::Theme>,
    ) -> Result<Arc<R::List>, ResourceError> {
        if !self.dark_mode {
            return self.inner.resolve_color_state_list(id, theme);
        }

        if let Some(cached) = self.cache.get(&id) {
            tracing::trace!(%id, "color state list cache hit");
            return Ok(cached);
        }

        let raw = self.inner.resolve_color_state_list(id, theme)?;
        let _span = tracing::debug_span!("desaturate_list", %id).entered();

        match self.desaturate_list(&raw) {
            Ok(list) => {
                tracing::debug!(%id, "color state list desaturated");
                Ok(self.cache.insert(id, Arc::new(list)))
            }
            Err(error) => {
                self.cache.record_fallback();
                tracing::warn!(
                    %id,
                    %error,
                    "desaturation failed, returning original color state list"
                );
                Ok(raw)
            }
        }
    }

    fn desaturate_list(&self, raw: &R::List) -> Result<R::List, ExtractError> {
        let states = raw.state_masks()?;
        let mut colors = raw.colors()?;
        if states.len() != colors.len() {
            return Err(ExtractError::LengthMismatch {
                states: states.len(),
                colors: colors.len(),
            });
        }
        tracing::debug!(entries = colors.len(), "desaturating rows");
        self.desaturation.apply_all(&mut colors);
        <R::List as StateList>::from_parts(states, colors)
    }
}

impl<R: ResourceResolver> ResourceResolver for DesaturatedResources<R> {
    type Theme = R::Theme;
    type List = R::List;

    fn resolve_color(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Argb, ResourceError> {
        self.get_color_themed(id, theme)
    }

    fn resolve_color_state_list(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Arc<Self::List>, ResourceError> {
        self.get_color_state_list_themed(id, theme)
    }
}

impl<R: ResourceResolver + fmt::Debug> fmt::Debug for DesaturatedResources<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesaturatedResources")
            .field("inner", &self.inner)
            .field("dark_mode", &self.dark_mode)
            .field("desaturation", &self.desaturation)
            .field("cache", &self.cache)
            .finish()
    }
}
