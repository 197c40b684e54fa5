//! General inventory storage.
//!
//! The inventory is an ordered, index-addressable list with a fixed slot
//! count. Every slot is always present and holds [`ItemStack::EMPTY`] when
//! unoccupied, mirroring the host's slot model.

use arrayvec::ArrayVec;

use crate::config::WardenConfig;
use crate::state::item::ItemStack;

/// Outcome of the "place back" placement rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The stack was merged into or stored at the given slot index.
    Stored { slot: usize },
    /// No partial stack had room and no slot was empty. The host's standard
    /// overflow policy applies to the returned stack (dropped at the
    /// player's feet).
    Overflow(ItemStack),
}

/// A player's general inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<ItemStack, { WardenConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    /// Creates an inventory with every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::from([ItemStack::EMPTY; WardenConfig::MAX_INVENTORY_SLOTS]),
        }
    }

    /// All slots in order. The length is always the full slot count.
    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> &ItemStack {
        &self.slots[index]
    }

    pub fn set_slot(&mut self, index: usize, stack: ItemStack) {
        self.slots[index] = stack;
    }

    /// Empties the slot and returns whatever it held.
    pub fn take_slot(&mut self, index: usize) -> ItemStack {
        std::mem::replace(&mut self.slots[index], ItemStack::EMPTY)
    }

    /// Reinserts a stack using the host's place-back rule: merge into the
    /// first partial stack of the same item with enough room, otherwise use
    /// the first empty slot, otherwise report overflow.
    pub fn place_item_back(&mut self, stack: ItemStack) -> Placement {
        debug_assert!(!stack.is_empty(), "placing an empty stack is a host bug");

        let fits = |existing: &ItemStack| {
            !existing.is_empty()
                && existing.handle == stack.handle
                && u32::from(existing.count) + u32::from(stack.count)
                    <= u32::from(WardenConfig::MAX_STACK)
        };
        if let Some(slot) = self.slots.iter().position(fits) {
            self.slots[slot].count += stack.count;
            return Placement::Stored { slot };
        }

        if let Some(slot) = self.slots.iter().position(ItemStack::is_empty) {
            self.slots[slot] = stack;
            return Placement::Stored { slot };
        }

        Placement::Overflow(stack)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::empty()
    }
}
