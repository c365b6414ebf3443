//! View states and the masks that select colors for them.
//!
//! A [`StateMask`] is one row of a color state list: it lists the states a view
//! must be in ([`StateMask::required`]) and the states it must not be in
//! ([`StateMask::excluded`]). The empty mask matches every state and is used
//! as the default row.
//!
//! # Example
//!
//! ```
//! use dusk_res::{StateFlags, StateMask};
//!
//! let pressed = StateMask::requiring(StateFlags::PRESSED);
//! let idle = StateMask::excluding(StateFlags::ENABLED);
//!
//! assert!(pressed.matches(StateFlags::PRESSED | StateFlags::FOCUSED));
//! assert!(!pressed.matches(StateFlags::FOCUSED));
//! assert!(idle.matches(StateFlags::empty()));
//! assert!(StateMask::ANY.matches(StateFlags::all()));
//! ```

#![forbid(unsafe_code)]

use bitflags::bitflags;

bitflags! {
    /// The interaction states a view can be in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct StateFlags: u32 {
        const ENABLED = 1 << 0;
        const FOCUSED = 1 << 1;
        const PRESSED = 1 << 2;
        const HOVERED = 1 << 3;
        const SELECTED = 1 << 4;
        const CHECKED = 1 << 5;
        const ACTIVATED = 1 << 6;
        const WINDOW_FOCUSED = 1 << 7;
    }
}

/// One row selector of a color state list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateMask {
    required: StateFlags,
    excluded: StateFlags,
}

impl StateMask {
    /// The wildcard mask; matches any state.
    pub const ANY: Self = Self {
        required: StateFlags::empty(),
        excluded: StateFlags::empty(),
    };

    /// Build a mask from required and excluded states.
    ///
    /// A flag listed in both sets can never match, so it is dropped from
    /// `excluded` to keep the mask satisfiable.
    pub fn new(required: StateFlags, excluded: StateFlags) -> Self {
        Self {
            required,
            excluded: excluded.difference(required),
        }
    }

    /// Mask that matches when all of `flags` are set.
    pub fn requiring(flags: StateFlags) -> Self {
        Self::new(flags, StateFlags::empty())
    }

    /// Mask that matches when none of `flags` are set.
    pub fn excluding(flags: StateFlags) -> Self {
        Self::new(StateFlags::empty(), flags)
    }

    pub fn required(&self) -> StateFlags {
        self.required
    }

    pub fn excluded(&self) -> StateFlags {
        self.excluded
    }

    /// True for the empty mask.
    pub fn is_wildcard(&self) -> bool {
        self.required.is_empty() && self.excluded.is_empty()
    }

    /// Whether a view in `state` selects this row.
    pub fn matches(&self, state: StateFlags) -> bool {
        state.contains(self.required) && !state.intersects(self.excluded)
    }
}

impl Default for StateMask {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<StateFlags> for StateMask {
    fn from(flags: StateFlags) -> Self {
        Self::requiring(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        assert!(StateMask::ANY.is_wildcard());
        assert!(StateMask::ANY.matches(StateFlags::empty()));
        assert!(StateMask::ANY.matches(StateFlags::all()));
        assert_eq!(StateMask::default(), StateMask::ANY);
    }

    #[test]
    fn required_flags_must_all_be_present() {
        let mask = StateMask::requiring(StateFlags::FOCUSED | StateFlags::PRESSED);
        assert!(mask.matches(StateFlags::FOCUSED | StateFlags::PRESSED));
        assert!(mask.matches(StateFlags::all()));
        assert!(!mask.matches(StateFlags::FOCUSED));
    }

    #[test]
    fn excluded_flags_must_be_absent() {
        let mask = StateMask::excluding(StateFlags::ENABLED);
        assert!(mask.matches(StateFlags::PRESSED));
        assert!(!mask.matches(StateFlags::ENABLED | StateFlags::PRESSED));
    }

    #[test]
    fn contradictory_flags_are_dropped_from_excluded() {
        let mask = StateMask::new(StateFlags::CHECKED, StateFlags::CHECKED | StateFlags::HOVERED);
        assert_eq!(mask.required(), StateFlags::CHECKED);
        assert_eq!(mask.excluded(), StateFlags::HOVERED);
        assert!(mask.matches(StateFlags::CHECKED));
    }

    #[test]
    fn from_flags_requires_them() {
        let mask: StateMask = StateFlags::SELECTED.into();
        assert_eq!(mask, StateMask::requiring(StateFlags::SELECTED));
        assert!(!mask.is_wildcard());
    }
}
