#![forbid(unsafe_code)]

//! The resolver capability.
//!
//! [`ResourceResolver`] is everything Dusk needs from a host resource system:
//! a raw color and a raw color state list for an identifier and an optional
//! theme. [`crate::DesaturatedResources`] implements the same trait, so a
//! desaturated view can be handed to anything that takes a resolver.

use std::fmt;
use std::sync::Arc;

use dusk_color::Argb;

use crate::error::ResourceError;
use crate::list::StateList;

/// Integer identifier of a color resource.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ResourceId(pub u32);

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({:#010x})", self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for ResourceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Source of raw colors and color state lists.
pub trait ResourceResolver {
    /// Theme context passed through to lookups.
    type Theme: ?Sized;
    /// Color state list type handed out by this resolver.
    type List: StateList;

    /// Resolve the raw color for `id`.
    fn resolve_color(&self, id: ResourceId, theme: Option<&Self::Theme>)
    -> Result<Argb, ResourceError>;

    /// Resolve the raw color state list for `id`.
    fn resolve_color_state_list(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Arc<Self::List>, ResourceError>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Arc<R> {
    type Theme = R::Theme;
    type List = R::List;

    fn resolve_color(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Argb, ResourceError> {
        (**self).resolve_color(id, theme)
    }

    fn resolve_color_state_list(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Arc<Self::List>, ResourceError> {
        (**self).resolve_color_state_list(id, theme)
    }
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    type Theme = R::Theme;
    type List = R::List;

    fn resolve_color(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Argb, ResourceError> {
        (**self).resolve_color(id, theme)
    }

    fn resolve_color_state_list(
        &self,
        id: ResourceId,
        theme: Option<&Self::Theme>,
    ) -> Result<Arc<Self::List>, ResourceError> {
        (**self).resolve_color_state_list(id, theme)
    }
}
