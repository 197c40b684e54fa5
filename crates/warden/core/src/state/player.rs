//! Player state as seen by the warden.
//!
//! The host engine owns the real player object; this is the slice of it the
//! interceptor and reconciler operate on. The warden never creates or
//! destroys players.

use crate::state::common::{EntityId, Hand, Position};
use crate::state::equipment::Equipment;
use crate::state::inventory::Inventory;
use crate::state::item::ItemStack;

/// A player's identity, location, and item storage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: EntityId,
    /// Display name, carried through to log lines.
    pub name: String,
    pub position: Position,
    /// Index of the general-inventory slot currently in the main hand.
    pub selected_slot: usize,
    pub inventory: Inventory,
    pub equipment: Equipment,
}

impl PlayerState {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Position::ORIGIN,
            selected_slot: 0,
            inventory: Inventory::empty(),
            equipment: Equipment::empty(),
        }
    }

    /// The stack in the main hand (the selected general-inventory slot).
    pub fn main_hand_item(&self) -> &ItemStack {
        self.inventory.slot(self.selected_slot)
    }

    /// The stack used from the given hand.
    pub fn held_item(&self, hand: Hand) -> &ItemStack {
        match hand {
            Hand::Main => self.main_hand_item(),
            Hand::Off => &self.equipment.offhand,
        }
    }
}
