use crate::state::{ItemHandle, PlayerState, Position};

/// External permission-policy oracle queried by the interceptor and the
/// reconciler.
///
/// Implementations decide *which* items are restricted and why; this crate
/// only enforces the answers. Every query is a pure function of live game
/// and player state at call time. Callers never cache results, so a policy
/// change is visible on the very next check.
///
/// The optional position scopes a query to a location (e.g. a tool that may
/// only be used inside a claim). Queries that have no meaningful location
/// pass `None`.
pub trait RestrictionOracle: Send + Sync {
    /// May the item exist in the player's general inventory?
    fn is_holdable(&self, player: &PlayerState, item: ItemHandle, pos: Option<Position>) -> bool;

    /// May the item occupy an equipment slot? A stricter subset of
    /// holdable; the oracle is trusted to keep the two consistent.
    fn is_wearable(&self, player: &PlayerState, item: ItemHandle, pos: Option<Position>) -> bool;

    /// May the item be actively used or interacted with?
    fn is_usable(&self, player: &PlayerState, item: ItemHandle, pos: Option<Position>) -> bool;

    /// May the item be used as an attack weapon?
    fn is_harmful(&self, player: &PlayerState, item: ItemHandle, pos: Option<Position>) -> bool;
}
