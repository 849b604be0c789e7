#![no_std]

//! # Vault Scenarios
//!
//! Black-box scenario suite for the vault/strategy pair. Each scenario is a
//! straight-line test: deposit, harvest, adjust allocations, donate, withdraw,
//! advance simulated time, harvest again, then compare accounting snapshots
//! under absolute tolerances.
//!
//! The harness pieces live here (snapshots and tolerance assertions); the
//! scenarios themselves are the test modules under `src/tests/`.

pub mod assertions;
pub mod snapshot;

/// One token in 7-decimal base units
pub const SCALAR_7: i128 = 10_000_000;

/// Standard deposit size driven through every scenario
pub const AMOUNT: i128 = 1_000 * SCALAR_7;

/// Pool APR the strategy accrues at (5%)
pub const YIELD_APR_BPS: u32 = 500;

/// Tokens pre-funded to the staking pool to cover yield and redemptions
pub const POOL_RESERVE: i128 = 1_000 * SCALAR_7;

pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 86_400;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
