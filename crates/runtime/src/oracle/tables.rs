//! Minimal [`RestrictionOracle`] backed by in-memory deny tables.

use std::collections::HashSet;

use warden_core::{ItemHandle, PlayerState, Position, RestrictionOracle};

/// Restriction oracle answering from static per-query deny tables.
///
/// Everything is permitted unless banned. Deciding which items belong in
/// which table is the embedder's policy; this type only answers the four
/// queries. The tables ignore the player and position arguments; a policy
/// that needs them brings its own oracle implementation.
#[derive(Clone, Debug, Default)]
pub struct TableRestrictionOracle {
    banned_holding: HashSet<ItemHandle>,
    banned_wearing: HashSet<ItemHandle>,
    banned_using: HashSet<ItemHandle>,
    banned_attacking: HashSet<ItemHandle>,
}

impl TableRestrictionOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bans the item from general inventories.
    pub fn ban_holding(&mut self, item: ItemHandle) {
        self.banned_holding.insert(item);
    }

    /// Bans the item from equipment slots.
    pub fn ban_wearing(&mut self, item: ItemHandle) {
        self.banned_wearing.insert(item);
    }

    /// Bans active use of the item.
    pub fn ban_using(&mut self, item: ItemHandle) {
        self.banned_using.insert(item);
    }

    /// Bans the item as an attack weapon.
    pub fn ban_attacking(&mut self, item: ItemHandle) {
        self.banned_attacking.insert(item);
    }
}

impl RestrictionOracle for TableRestrictionOracle {
    fn is_holdable(&self, _player: &PlayerState, item: ItemHandle, _pos: Option<Position>) -> bool {
        !self.banned_holding.contains(&item)
    }

    fn is_wearable(&self, _player: &PlayerState, item: ItemHandle, _pos: Option<Position>) -> bool {
        !self.banned_wearing.contains(&item)
    }

    fn is_usable(&self, _player: &PlayerState, item: ItemHandle, _pos: Option<Position>) -> bool {
        !self.banned_using.contains(&item)
    }

    fn is_harmful(&self, _player: &PlayerState, item: ItemHandle, _pos: Option<Position>) -> bool {
        !self.banned_attacking.contains(&item)
    }
}
