//! Sentinel-based arena handle.
//!
//! Uses a reserved value (`usize::MAX`) instead of `Option<usize>` for the
//! prev/next/head/tail links, keeping nodes small and links `Copy`.

/// Handle to a node slot in a list's arena, or the "no node" sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Link(usize);

impl Link {
    /// Sentinel value representing "no node".
    pub(crate) const NONE: Link = Link(usize::MAX);

    /// Wraps an arena slot index.
    #[inline]
    pub(crate) fn from_slot(slot: usize) -> Self {
        debug_assert_ne!(slot, usize::MAX, "slot collides with sentinel");
        Link(slot)
    }

    /// Returns the arena slot, or `None` for the sentinel.
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            Some(self.0)
        }
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub(crate) fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    pub(crate) fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::NONE
    }
}

impl core::fmt::Debug for Link {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.slot() {
            Some(slot) => write!(f, "Link({slot})"),
            None => write!(f, "Link(none)"),
        }
    }
}
