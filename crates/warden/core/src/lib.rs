//! Pure domain rules for per-player item-permission enforcement.
//!
//! `warden-core` defines the state model (players, inventories, equipped
//! slots, item stacks), the action-attempt vocabulary, and the
//! classification rules the reconciliation sweep applies. It performs no
//! logging and no I/O; the `runtime` crate wires these types to the host
//! engine's callbacks and emits the observability lines.
pub mod action;
pub mod classify;
pub mod config;
pub mod env;
pub mod state;

pub use action::{ActionAttempt, Verdict};
pub use classify::should_remove;
pub use config::WardenConfig;
pub use env::RestrictionOracle;
pub use state::{
    EntityId, Equipment, Hand, Inventory, ItemHandle, ItemStack, Placement, PlayerState, Position,
    Realm,
};
