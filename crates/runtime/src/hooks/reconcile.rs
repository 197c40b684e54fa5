//! Periodic inventory reconciliation.
//!
//! Once per interval per player, the reconciler walks equipped slots and
//! the general inventory and corrects drift the interceptor could not
//! prevent (permissions revoked while the item was already held). The
//! interval is driven by a per-player countdown owned here; countdowns are
//! created on first sight of a player and discarded on departure.

use std::collections::HashMap;

use tracing::debug;

use warden_core::{
    EntityId, ItemStack, Placement, PlayerState, Realm, RestrictionOracle, should_remove,
};

/// Corrections produced by a single sweep.
///
/// Dropped stacks are outbound requests: the host is expected to spawn each
/// one into the world at the player's location as a thrown drop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of equipment slots cleared back into the general inventory.
    pub unequipped: usize,
    /// Stacks removed from the player entirely.
    pub dropped: Vec<ItemStack>,
}

impl SweepReport {
    pub fn is_noop(&self) -> bool {
        self.unequipped == 0 && self.dropped.is_empty()
    }
}

/// Runs the two-phase correction sweep on a fixed per-player cadence.
pub struct Reconciler {
    interval: u32,
    countdowns: HashMap<EntityId, u32>,
}

impl Reconciler {
    /// Creates a reconciler sweeping every `interval` ticks per player.
    /// Intervals below one tick are clamped to one.
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            countdowns: HashMap::new(),
        }
    }

    /// Per-tick entry point, called once per player per simulation tick.
    ///
    /// Returns `None` on throttled ticks and on the presentation side;
    /// returns the sweep's report when one ran. A player's first tick
    /// always sweeps, and subsequent sweeps land exactly `interval` ticks
    /// apart.
    pub fn on_player_tick<O>(
        &mut self,
        oracle: &O,
        player: &mut PlayerState,
        realm: Realm,
    ) -> Option<SweepReport>
    where
        O: RestrictionOracle + ?Sized,
    {
        if !realm.is_authoritative() {
            return None;
        }

        let countdown = self.countdowns.entry(player.id).or_insert(0);
        if *countdown > 0 {
            *countdown -= 1;
            return None;
        }

        // Rearm so the next sweep lands exactly `interval` ticks from now.
        *countdown = self.interval - 1;

        Some(sweep(oracle, player))
    }

    /// Discards the countdown of a departed player.
    pub fn forget_player(&mut self, player: EntityId) {
        self.countdowns.remove(&player);
    }
}

fn sweep<O>(oracle: &O, player: &mut PlayerState) -> SweepReport
where
    O: RestrictionOracle + ?Sized,
{
    let mut report = SweepReport::default();

    // Inventory slots written by the equipment pass. The general pass skips
    // them, so an evicted item that is also unholdable is only caught on
    // the next cycle.
    let mut reinserted: Vec<usize> = Vec::new();

    // Equipment pass: armor slots, then offhand.
    let flagged: Vec<usize> = (0..player.equipment.armor.len())
        .filter(|&index| should_remove(oracle, player, player.equipment.armor_slot(index), true))
        .collect();
    for index in flagged {
        let stack = player.equipment.take_armor(index);
        unequip(player, stack, &mut reinserted, &mut report);
    }
    if should_remove(oracle, player, &player.equipment.offhand, true) {
        let stack = player.equipment.take_offhand();
        unequip(player, stack, &mut reinserted, &mut report);
    }

    // General pass: collect candidates first, then remove, so the scan
    // never observes its own mutations.
    let candidates: Vec<usize> = player
        .inventory
        .slots()
        .iter()
        .enumerate()
        .filter(|&(index, stack)| {
            !reinserted.contains(&index) && should_remove(oracle, player, stack, false)
        })
        .map(|(index, _)| index)
        .collect();

    if !candidates.is_empty() {
        debug!(
            player = %player.name,
            count = candidates.len(),
            "player is holding items that should be dropped"
        );
    }
    for index in candidates {
        let stack = player.inventory.take_slot(index);
        debug!(player = %player.name, item = %stack.handle, "dropping item the player may not hold");
        report.dropped.push(stack);
    }

    report
}

/// Clears one equipped stack back into the general inventory, recording
/// where it landed. A full inventory falls back to the host's standard
/// overflow policy: the stack is dropped instead.
fn unequip(
    player: &mut PlayerState,
    stack: ItemStack,
    reinserted: &mut Vec<usize>,
    report: &mut SweepReport,
) {
    debug!(player = %player.name, item = %stack.handle, "unequipping item the player may not wear");
    report.unequipped += 1;

    match player.inventory.place_item_back(stack) {
        Placement::Stored { slot } => reinserted.push(slot),
        Placement::Overflow(stack) => {
            debug!(player = %player.name, item = %stack.handle, "inventory full, dropping unequipped item");
            report.dropped.push(stack);
        }
    }
}
