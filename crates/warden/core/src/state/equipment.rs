//! Equipment storage: armor slots plus the offhand slot.
//!
//! Equipment slots hold full item stacks, not references into the general
//! inventory; moving an item between equipment and inventory is a relocation
//! of the stack itself.

use arrayvec::ArrayVec;

use crate::config::WardenConfig;
use crate::state::item::ItemStack;

/// A player's equipped slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Armor slots, index-addressable. Every slot is always present.
    pub armor: ArrayVec<ItemStack, { WardenConfig::ARMOR_SLOTS }>,
    /// The offhand slot.
    pub offhand: ItemStack,
}

impl Equipment {
    /// Creates equipment with every slot empty.
    pub fn empty() -> Self {
        Self {
            armor: ArrayVec::from([ItemStack::EMPTY; WardenConfig::ARMOR_SLOTS]),
            offhand: ItemStack::EMPTY,
        }
    }

    pub fn armor_slot(&self, index: usize) -> &ItemStack {
        &self.armor[index]
    }

    /// Empties the armor slot and returns whatever it held.
    pub fn take_armor(&mut self, index: usize) -> ItemStack {
        std::mem::replace(&mut self.armor[index], ItemStack::EMPTY)
    }

    /// Empties the offhand slot and returns whatever it held.
    pub fn take_offhand(&mut self) -> ItemStack {
        std::mem::replace(&mut self.offhand, ItemStack::EMPTY)
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::empty()
    }
}
