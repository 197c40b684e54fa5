//! Action-attempt model.
//!
//! Every item-involving action the host can report is one variant of a
//! closed enum, carrying the context needed to resolve the item in
//! question. Modelling the hooks as one enum keeps the decision logic in a
//! single exhaustiveness-checked dispatch instead of six loose callbacks.

use crate::state::{EntityId, Hand, ItemStack, Position};

/// A player action the host is about to perform, reported before any game
/// state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionAttempt {
    /// The player is about to pick up an item entity from the ground.
    Pickup { stack: ItemStack },

    /// Left- or right-click on a block with whatever the acting hand holds.
    UseItemOnBlock { hand: Hand, pos: Position },

    /// Right-click with the held item, no target block.
    UseItem { hand: Hand },

    /// Interact with an entity using the held item.
    InteractEntity { hand: Hand, target: EntityId },

    /// Damage is about to be dealt with the main-hand item. Only built when
    /// the damage source is a player; environmental damage never reaches
    /// the warden.
    Attack { victim: EntityId, amount: u16 },

    /// The player is about to break the block at `pos` with the main-hand
    /// item.
    BreakBlock { pos: Position },
}

/// Decision returned by the interceptor for an attempted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The action proceeds unchanged.
    Allow,
    /// The action is suppressed before it mutates game state.
    Veto,
}

impl Verdict {
    #[inline]
    pub fn is_veto(self) -> bool {
        matches!(self, Self::Veto)
    }
}
