use soroban_sdk::{contracttype, Address};

/// Basis point denominator for debt ratios.
pub const MAX_BPS: i128 = 10_000;

// ============================================================================
// Storage Data Structures
// ============================================================================

/// Global vault configuration (set once at construction)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The underlying asset managed by the vault
    pub token: Address,
}

/// Per-strategy accounting record
///
/// Mirrors the strategy bookkeeping the vault exposes through `strategies()`.
/// All monetary fields are in base units of the underlying token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyParams {
    /// Timestamp the strategy was added
    pub activation: u64,

    /// Share of total assets the strategy may manage, in basis points
    pub debt_ratio: u32,

    /// Outstanding principal currently allocated to the strategy
    pub total_debt: i128,

    /// Cumulative gain reported by the strategy
    pub total_gain: i128,

    /// Cumulative loss reported by the strategy
    pub total_loss: i128,

    /// Timestamp of the last report from the strategy
    pub last_report: u64,
}
