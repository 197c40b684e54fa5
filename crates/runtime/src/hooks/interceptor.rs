//! Pre-action decision hooks.
//!
//! One decision per attempted action, answered inline on the simulation
//! thread before the host mutates any state. Handlers resolve the item in
//! question, query the restriction oracle, and return a verdict; the only
//! side effect is a debug line on each veto.

use tracing::debug;

use warden_core::{
    ActionAttempt, EntityId, Hand, ItemStack, PlayerState, Position, RestrictionOracle, Verdict,
};

/// Decides whether an attempted action may proceed.
///
/// Single dispatch over the closed action set; the match is exhaustive, so
/// adding a new action variant forces a decision here.
pub fn decide<O>(oracle: &O, player: &PlayerState, attempt: &ActionAttempt) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    match *attempt {
        ActionAttempt::Pickup { stack } => before_pickup(oracle, player, &stack),
        ActionAttempt::UseItemOnBlock { hand, pos } => {
            before_use_item_on_block(oracle, player, hand, pos)
        }
        ActionAttempt::UseItem { hand } => before_use_item(oracle, player, hand),
        ActionAttempt::InteractEntity { hand, target } => {
            before_interact_entity(oracle, player, hand, target)
        }
        ActionAttempt::Attack { victim, amount } => before_attack(oracle, player, victim, amount),
        ActionAttempt::BreakBlock { pos } => before_mine(oracle, player, pos),
    }
}

fn before_pickup<O>(oracle: &O, player: &PlayerState, stack: &ItemStack) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    if oracle.is_holdable(player, stack.handle, None) {
        return Verdict::Allow;
    }

    debug!(player = %player.name, item = %stack.handle, "blocking item pickup");
    Verdict::Veto
}

fn before_use_item_on_block<O>(
    oracle: &O,
    player: &PlayerState,
    hand: Hand,
    pos: Position,
) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    let tool = player.held_item(hand);

    // An empty hand is always usable; skip the oracle on the common case.
    if tool.is_empty() || oracle.is_usable(player, tool.handle, Some(pos)) {
        return Verdict::Allow;
    }

    debug!(player = %player.name, item = %tool.handle, pos = %pos, "blocking block interaction");
    Verdict::Veto
}

fn before_use_item<O>(oracle: &O, player: &PlayerState, hand: Hand) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    // No empty-hand short-circuit here; only the block-click path carries it.
    let tool = player.held_item(hand);

    if oracle.is_usable(player, tool.handle, None) {
        return Verdict::Allow;
    }

    debug!(player = %player.name, item = %tool.handle, "blocking item use");
    Verdict::Veto
}

fn before_interact_entity<O>(
    oracle: &O,
    player: &PlayerState,
    hand: Hand,
    target: EntityId,
) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    let tool = player.held_item(hand);

    if oracle.is_usable(player, tool.handle, None) {
        return Verdict::Allow;
    }

    debug!(player = %player.name, item = %tool.handle, target = %target, "blocking entity interaction");
    Verdict::Veto
}

fn before_attack<O>(oracle: &O, player: &PlayerState, victim: EntityId, amount: u16) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    let weapon = player.main_hand_item();

    if oracle.is_harmful(player, weapon.handle, None) {
        return Verdict::Allow;
    }

    debug!(
        player = %player.name,
        item = %weapon.handle,
        victim = %victim,
        amount,
        "blocking attack"
    );
    Verdict::Veto
}

fn before_mine<O>(oracle: &O, player: &PlayerState, pos: Position) -> Verdict
where
    O: RestrictionOracle + ?Sized,
{
    let tool = player.main_hand_item();

    if oracle.is_usable(player, tool.handle, Some(pos)) {
        return Verdict::Allow;
    }

    debug!(player = %player.name, item = %tool.handle, pos = %pos, "blocking block break");
    Verdict::Veto
}
