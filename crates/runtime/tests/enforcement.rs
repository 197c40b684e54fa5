//! End-to-end enforcement scenarios driving the warden the way a host
//! engine would: action attempts answered inline, tick callbacks feeding
//! the reconciliation cadence.

use std::sync::atomic::{AtomicBool, Ordering};

use runtime::{EventResult, TableRestrictionOracle, Warden};
use warden_core::{
    ActionAttempt, EntityId, Hand, ItemHandle, ItemStack, PlayerState, Position, Realm,
    RestrictionOracle, WardenConfig,
};

const SWORD: ItemHandle = ItemHandle(101);
const CHESTPLATE: ItemHandle = ItemHandle(102);
const CURSED_RELIC: ItemHandle = ItemHandle(103);

/// Renders the warden's debug lines when a test runs with RUST_LOG set.
fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn restricted_warden() -> Warden<TableRestrictionOracle> {
    init_logs();
    let mut oracle = TableRestrictionOracle::new();
    oracle.ban_attacking(SWORD);
    oracle.ban_wearing(CHESTPLATE);
    oracle.ban_holding(CURSED_RELIC);
    Warden::new(oracle)
}

fn player() -> PlayerState {
    PlayerState::new(EntityId(7), "alex")
}

#[test]
fn pickup_of_banned_item_is_cancelled() {
    let warden = restricted_warden();
    let player = player();

    let result = warden.intercept(
        &player,
        &ActionAttempt::Pickup {
            stack: ItemStack::of(CURSED_RELIC),
        },
    );

    assert_eq!(result, EventResult::Cancel);
}

#[test]
fn attack_with_banned_weapon_is_cancelled() {
    let warden = restricted_warden();
    let mut player = player();
    player.inventory.set_slot(0, ItemStack::of(SWORD));

    let result = warden.intercept(
        &player,
        &ActionAttempt::Attack {
            victim: EntityId(30),
            amount: 7,
        },
    );

    assert_eq!(result, EventResult::Cancel);
}

#[test]
fn empty_hand_block_click_passes() {
    let warden = restricted_warden();
    let player = player();

    let result = warden.intercept(
        &player,
        &ActionAttempt::UseItemOnBlock {
            hand: Hand::Main,
            pos: Position::new(10, -3),
        },
    );

    assert_eq!(result, EventResult::Pass);
}

#[test]
fn sweep_restores_the_inventory_invariants() {
    let mut warden = restricted_warden();
    let mut player = player();
    player.equipment.armor[1] = ItemStack::of(CHESTPLATE);
    player.inventory.set_slot(8, ItemStack::new(CURSED_RELIC, 2));

    let report = warden
        .player_tick(&mut player, Realm::Server)
        .expect("first tick sweeps");

    // The chest-plate may still be held, so it moves to general storage;
    // the relic may not, so it leaves the player as a drop request.
    assert_eq!(report.unequipped, 1);
    assert_eq!(report.dropped, vec![ItemStack::new(CURSED_RELIC, 2)]);
    assert!(player.equipment.armor_slot(1).is_empty());
    assert!(player.inventory.slots().contains(&ItemStack::of(CHESTPLATE)));
}

#[test]
fn sweeps_follow_the_configured_cadence() {
    let mut warden = Warden::with_config(
        TableRestrictionOracle::new(),
        WardenConfig::with_sweep_interval(5),
    );
    let mut player = player();

    let sweep_ticks: Vec<u32> = (1..=15)
        .filter(|_| warden.player_tick(&mut player, Realm::Server).is_some())
        .collect();

    assert_eq!(sweep_ticks, vec![1, 6, 11]);
}

#[test]
fn departed_players_sweep_again_on_return() {
    let mut warden = restricted_warden();
    let mut player = player();

    assert!(warden.player_tick(&mut player, Realm::Server).is_some());
    assert!(warden.player_tick(&mut player, Realm::Server).is_none());

    warden.player_left(player.id);

    assert!(warden.player_tick(&mut player, Realm::Server).is_some());
}

#[test]
fn presentation_side_never_mutates_inventories() {
    let mut warden = restricted_warden();
    let mut player = player();
    player.inventory.set_slot(0, ItemStack::of(CURSED_RELIC));

    for _ in 0..40 {
        assert!(warden.player_tick(&mut player, Realm::Client).is_none());
    }

    assert_eq!(*player.inventory.slot(0), ItemStack::of(CURSED_RELIC));
}

/// Oracle whose answers depend on state that changes after the warden is
/// built.
#[derive(Default)]
struct LockdownOracle {
    lockdown: AtomicBool,
}

impl LockdownOracle {
    fn permitted(&self) -> bool {
        !self.lockdown.load(Ordering::Relaxed)
    }
}

impl RestrictionOracle for LockdownOracle {
    fn is_holdable(&self, _: &PlayerState, _: ItemHandle, _: Option<Position>) -> bool {
        self.permitted()
    }
    fn is_wearable(&self, _: &PlayerState, _: ItemHandle, _: Option<Position>) -> bool {
        self.permitted()
    }
    fn is_usable(&self, _: &PlayerState, _: ItemHandle, _: Option<Position>) -> bool {
        self.permitted()
    }
    fn is_harmful(&self, _: &PlayerState, _: ItemHandle, _: Option<Position>) -> bool {
        self.permitted()
    }
}

#[test]
fn revoked_permissions_take_effect_without_restart() {
    // Every decision requeries the oracle; nothing is cached.
    let warden = Warden::new(LockdownOracle::default());
    let player = player();
    let attempt = ActionAttempt::Pickup {
        stack: ItemStack::of(SWORD),
    };

    assert_eq!(warden.intercept(&player, &attempt), EventResult::Pass);

    warden.oracle().lockdown.store(true, Ordering::Relaxed);

    assert_eq!(warden.intercept(&player, &attempt), EventResult::Cancel);
}
