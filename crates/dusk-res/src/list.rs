#![forbid(unsafe_code)]

//! Color state lists.
//!
//! A color state list is an ordered set of `(mask, color)` rows. Consumers
//! pick the first row whose mask matches the current view state, so row order
//! is part of the value.
//!
//! [`StateList`] is the capability the desaturating view needs from a list
//! type: take it apart into parallel masks/colors, and build one back. The
//! native [`ColorStateList`] never fails to take apart; adapters over foreign
//! list types may.

use dusk_color::Argb;

use crate::error::ExtractError;
use crate::state::{StateFlags, StateMask};

/// Decomposition and construction of a state list type.
pub trait StateList: Sized {
    /// The row masks, in order.
    fn state_masks(&self) -> Result<Vec<StateMask>, ExtractError>;

    /// The row colors, aligned with [`StateList::state_masks`].
    fn colors(&self) -> Result<Vec<Argb>, ExtractError>;

    /// Build a list from parallel masks and colors.
    fn from_parts(states: Vec<StateMask>, colors: Vec<Argb>) -> Result<Self, ExtractError>;
}

/// An ordered list of `(state mask, color)` rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorStateList {
    states: Vec<StateMask>,
    colors: Vec<Argb>,
}

impl ColorStateList {
    /// Build a list from parallel masks and colors.
    pub fn new(states: Vec<StateMask>, colors: Vec<Argb>) -> Result<Self, ExtractError> {
        if states.len() != colors.len() {
            return Err(ExtractError::LengthMismatch {
                states: states.len(),
                colors: colors.len(),
            });
        }
        Ok(Self { states, colors })
    }

    /// Single wildcard row holding `color`.
    pub fn value_of(color: Argb) -> Self {
        Self {
            states: vec![StateMask::ANY],
            colors: vec![color],
        }
    }

    /// Build a list from `(mask, color)` rows.
    pub fn from_rows(rows: impl IntoIterator<Item = (StateMask, Argb)>) -> Self {
        let (states, colors) = rows.into_iter().unzip();
        Self { states, colors }
    }

    pub fn states(&self) -> &[StateMask] {
        &self.states
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> impl Iterator<Item = (StateMask, Argb)> + '_ {
        self.states.iter().copied().zip(self.colors.iter().copied())
    }

    /// True when any row depends on view state.
    pub fn is_stateful(&self) -> bool {
        self.states.iter().any(|mask| !mask.is_wildcard())
    }

    /// Color of the first row matching `state`, or `fallback`.
    pub fn color_for_state(&self, state: StateFlags, fallback: Argb) -> Argb {
        self.iter()
            .find(|(mask, _)| mask.matches(state))
            .map_or(fallback, |(_, color)| color)
    }

    /// Color of the first wildcard row, else of the first row.
    ///
    /// An empty list has no color and reports [`Argb::TRANSPARENT`].
    pub fn default_color(&self) -> Argb {
        self.iter()
            .find(|(mask, _)| mask.is_wildcard())
            .map(|(_, color)| color)
            .or_else(|| self.colors.first().copied())
            .unwrap_or(Argb::TRANSPARENT)
    }
}

impl StateList for ColorStateList {
    fn state_masks(&self) -> Result<Vec<StateMask>, ExtractError> {
        Ok(self.states.clone())
    }

    fn colors(&self) -> Result<Vec<Argb>, ExtractError> {
        Ok(self.colors.clone())
    }

    fn from_parts(states: Vec<StateMask>, colors: Vec<Argb>) -> Result<Self, ExtractError> {
        Self::new(states, colors)
    }
}
