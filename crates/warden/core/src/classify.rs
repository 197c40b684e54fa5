//! Stack classification shared by both reconciliation passes.

use crate::env::RestrictionOracle;
use crate::state::{ItemStack, PlayerState};

/// Returns whether a stack must leave the slot it occupies.
///
/// Empty slots are never flagged. A stack is flagged when the player may
/// not hold it at all, or (with `check_wearable` set, as the equipment
/// pass does) when the player may hold it but not wear it. The holdable
/// query runs first so the wearable query is skipped for items that already
/// failed it.
pub fn should_remove<O>(
    oracle: &O,
    player: &PlayerState,
    stack: &ItemStack,
    check_wearable: bool,
) -> bool
where
    O: RestrictionOracle + ?Sized,
{
    if stack.is_empty() {
        return false;
    }

    if !oracle.is_holdable(player, stack.handle, None) {
        return true;
    }

    check_wearable && !oracle.is_wearable(player, stack.handle, None)
}
