use soroban_sdk::contracterror;

/// Error codes for the strategy contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ========================================================================
    // Configuration errors (10-19)
    // ========================================================================
    /// Discount must be between 1 and 10_000 basis points
    InvalidDiscount = 10,

    /// Amount is invalid (zero or negative)
    InvalidAmount = 11,

    // ========================================================================
    // Harvest errors (20-29)
    // ========================================================================
    /// Reported profit or loss fell outside the health check bounds
    HealthCheckFailed = 20,

    // ========================================================================
    // Math errors (60-69)
    // ========================================================================
    /// Arithmetic overflow occurred
    OverflowError = 60,
}
