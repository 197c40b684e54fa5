//! Top-level orchestrator wiring the enforcement hooks to a host engine.

use warden_core::{
    ActionAttempt, EntityId, PlayerState, Realm, RestrictionOracle, WardenConfig,
};

use crate::events::EventResult;
use crate::hooks::{Reconciler, SweepReport, decide};

/// Embeds the interceptor and the reconciler behind one host-facing
/// surface.
///
/// The host calls [`Warden::intercept`] inline with each action attempt
/// and [`Warden::player_tick`] once per player per simulation tick, all on
/// the single simulation thread. The oracle is injected once at
/// construction and shared by both hooks; it is queried live on every
/// check, never cached.
pub struct Warden<O> {
    oracle: O,
    reconciler: Reconciler,
}

impl<O: RestrictionOracle> Warden<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, WardenConfig::default())
    }

    pub fn with_config(oracle: O, config: WardenConfig) -> Self {
        Self {
            oracle,
            reconciler: Reconciler::new(config.sweep_interval),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Answers an action attempt with the engine-facing pass/cancel signal.
    pub fn intercept(&self, player: &PlayerState, attempt: &ActionAttempt) -> EventResult {
        decide(&self.oracle, player, attempt).into()
    }

    /// Runs the per-player reconciliation countdown; returns a report when
    /// a sweep actually ran. The stacks in `SweepReport::dropped` must be
    /// spawned into the world by the caller.
    pub fn player_tick(&mut self, player: &mut PlayerState, realm: Realm) -> Option<SweepReport> {
        self.reconciler.on_player_tick(&self.oracle, player, realm)
    }

    /// Discards per-player state when a player leaves the simulation.
    pub fn player_left(&mut self, player: EntityId) {
        self.reconciler.forget_player(player);
    }
}
