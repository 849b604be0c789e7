use soroban_sdk::contracterror;

/// Error codes for the vault contract
///
/// Codes are grouped by category so related failures stay adjacent.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ========================================================================
    // Deposit / withdraw errors (10-19)
    // ========================================================================
    /// Amount is invalid (zero or negative)
    InvalidAmount = 10,

    /// Caller holds fewer shares than requested
    InsufficientShares = 11,

    /// Operation is blocked while the vault is shut down
    VaultShutdown = 12,

    // ========================================================================
    // Strategy management errors (20-29)
    // ========================================================================
    /// Strategy has not been added to the vault
    StrategyNotActive = 20,

    /// Strategy is already active
    StrategyAlreadyActive = 21,

    /// Aggregate debt ratio would exceed 10_000 basis points
    DebtRatioTooHigh = 22,

    // ========================================================================
    // Report errors (30-39)
    // ========================================================================
    /// Reported loss exceeds the strategy's recorded debt
    LossTooHigh = 30,

    // ========================================================================
    // Math errors (60-69)
    // ========================================================================
    /// Arithmetic overflow occurred
    OverflowError = 60,
}
