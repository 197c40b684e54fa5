//! Item-related state types.
//!
//! - ItemHandle: reference to an item definition owned by the host
//! - ItemStack: (item, count) pair occupying a single slot

use std::fmt;

/// Reference to an item definition stored outside this crate.
///
/// Handle `0` is reserved for "no item" (the host's air/none entry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl ItemHandle {
    /// Reserved handle meaning "no item".
    pub const NONE: Self = Self(0);
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A stack of identical items occupying one inventory or equipment slot.
///
/// Slots always contain a stack; "no item" is the [`ItemStack::EMPTY`]
/// sentinel rather than an absent entry, matching the host's slot model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub handle: ItemHandle,
    pub count: u16,
}

impl ItemStack {
    /// Sentinel stack meaning the slot holds nothing.
    pub const EMPTY: Self = Self {
        handle: ItemHandle::NONE,
        count: 0,
    };

    pub fn new(handle: ItemHandle, count: u16) -> Self {
        Self { handle, count }
    }

    /// Single item of the given kind.
    pub fn of(handle: ItemHandle) -> Self {
        Self { handle, count: 1 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.handle == ItemHandle::NONE
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}
