#![forbid(unsafe_code)]

//! In-memory resolver.
//!
//! `ResourceTable` maps identifiers to colors and color state lists. A
//! [`ThemeOverlay`] passed at lookup time overrides individual colors, the way
//! a theme attribute would in a full resource system.
//!
//! Lookups cross over between kinds: asking for a color of a state list
//! resource returns the list's default color, and asking for a state list of a
//! plain color wraps it with [`ColorStateList::value_of`].
//!
//! # Example
//!
//! ```
//! use dusk_color::Argb;
//! use dusk_res::{ResourceId, ResourceResolver, ResourceTable, ThemeOverlay};
//!
//! let accent = ResourceId(1);
//! let table = ResourceTable::new().with_color(accent, Argb::RED);
//! let night = ThemeOverlay::new().with_color(accent, Argb::BLUE);
//!
//! assert_eq!(table.resolve_color(accent, None).unwrap(), Argb::RED);
//! assert_eq!(table.resolve_color(accent, Some(&night)).unwrap(), Argb::BLUE);
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use dusk_color::Argb;

use crate::error::ResourceError;
use crate::list::ColorStateList;
use crate::resolver::{ResourceId, ResourceResolver};

/// Per-lookup color overrides.
#[derive(Debug, Clone, Default)]
pub struct ThemeOverlay {
    colors: AHashMap<ResourceId, Argb>,
}

impl ThemeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, id: ResourceId, color: Argb) -> Self {
        self.colors.insert(id, color);
        self
    }

    pub fn color(&self, id: ResourceId) -> Option<Argb> {
        self.colors.get(&id).copied()
    }
}

/// Map-backed [`ResourceResolver`].
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    colors: AHashMap<ResourceId, Argb>,
    lists: AHashMap<ResourceId, Arc<ColorStateList>>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, id: ResourceId, color: Argb) -> Self {
        self.insert_color(id, color);
        self
    }

    #[must_use]
    pub fn with_list(mut self, id: ResourceId, list: ColorStateList) -> Self {
        self.insert_list(id, list);
        self
    }

    /// Register a color, replacing any resource with the same id.
    pub fn insert_color(&mut self, id: ResourceId, color: Argb) {
        self.lists.remove(&id);
        self.colors.insert(id, color);
    }

    /// Register a state list, replacing any resource with the same id.
    pub fn insert_list(&mut self, id: ResourceId, list: ColorStateList) {
        self.colors.remove(&id);
        self.lists.insert(id, Arc::new(list));
    }

    pub fn contains(&self, id: ResourceId) -> bool {
        self.colors.contains_key(&id) || self.lists.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.colors.len() + self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.lists.is_empty()
    }
}

impl ResourceResolver for ResourceTable {
    type Theme = ThemeOverlay;
    type List = ColorStateList;

    fn resolve_color(
        &self,
        id: ResourceId,
        theme: Option<&ThemeOverlay>,
    ) -> Result<Argb, ResourceError> {
        if let Some(color) = theme.and_then(|t| t.color(id)) {
            return Ok(color);
        }
        if let Some(color) = self.colors.get(&id) {
            return Ok(*color);
        }
        self.lists
            .get(&id)
            .map(|list| list.default_color())
            .ok_or(ResourceError::NotFound { id })
    }

    fn resolve_color_state_list(
        &self,
        id: ResourceId,
        theme: Option<&ThemeOverlay>,
    ) -> Result<Arc<ColorStateList>, ResourceError> {
        if let Some(list) = self.lists.get(&id) {
            return Ok(Arc::clone(list));
        }
        self.resolve_color(id, theme)
            .map(|color| Arc::new(ColorStateList::value_of(color)))
    }
}
