use soroban_sdk::{contracttype, Address};

/// Basis point denominator
pub const MAX_BPS: i128 = 10_000;

/// Seconds in a (non-leap) year, for APR accrual
pub const SECONDS_PER_YEAR: i128 = 31_536_000;

/// Share of an emergency redemption the pool holds back until the next
/// interaction (0.30%)
pub const REDEEM_HOLDBACK_BPS: u32 = 30;

/// Rebate the pool returns on the holdback (0.01%), leaving 0.29% deferred
pub const REDEEM_REBATE_BPS: u32 = 1;

/// Health check: reported profit may not exceed this share of debt
pub const PROFIT_LIMIT_BPS: i128 = 100;

/// Health check: reported loss may not exceed this share of debt
pub const LOSS_LIMIT_BPS: i128 = 1;

// ============================================================================
// Storage Data Structures
// ============================================================================

/// Strategy wiring (set once at construction)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Vault this strategy reports to
    pub vault: Address,

    /// Underlying asset
    pub token: Address,

    /// The staking pool holding the invested position
    pub staking_pool: Address,
}

/// The invested position, in base units of the underlying
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// Principal currently staked in the pool
    pub staked: i128,

    /// Redemption holdback waiting to be released by the pool
    pub deferred: i128,

    /// Yield accrued but not yet claimed
    pub pending_yield: i128,

    /// Timestamp of the last accrual checkpoint
    pub last_accrual: u64,
}
