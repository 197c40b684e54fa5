/// Warden configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WardenConfig {
    /// Number of simulation ticks between two reconciliation sweeps for a
    /// single player. Clamped to at least 1 by consumers.
    pub sweep_interval: u32,
}

impl WardenConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of slots in a player's general inventory.
    pub const MAX_INVENTORY_SLOTS: usize = 36;
    /// Number of armor slots in a player's equipment set.
    pub const ARMOR_SLOTS: usize = 4;

    // ===== host inventory rules =====
    /// Largest count a single slot may hold when merging stacks.
    pub const MAX_STACK: u16 = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SWEEP_INTERVAL: u32 = 10;

    pub fn new() -> Self {
        Self {
            sweep_interval: Self::DEFAULT_SWEEP_INTERVAL,
        }
    }

    pub fn with_sweep_interval(sweep_interval: u32) -> Self {
        Self { sweep_interval }
    }
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self::new()
    }
}
