use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{token, Env};

use crate::storage;
use crate::types::{
    Config, Position, MAX_BPS, REDEEM_HOLDBACK_BPS, REDEEM_REBATE_BPS, SECONDS_PER_YEAR,
};

// ============================================================================
// Yield Accrual
// ============================================================================

/// Yield earned since the last checkpoint, without persisting it.
pub(crate) fn accrued_since(env: &Env, pos: &Position, apr_bps: u32) -> i128 {
    let elapsed = env.ledger().timestamp().saturating_sub(pos.last_accrual);
    if pos.staked == 0 || elapsed == 0 {
        return 0;
    }
    pos.staked
        .fixed_mul_floor(
            apr_bps as i128 * elapsed as i128,
            MAX_BPS * SECONDS_PER_YEAR,
        )
        .unwrap_or(0)
}

/// Checkpoint accrual into the pending bucket.
pub(crate) fn accrue(env: &Env, pos: &mut Position) {
    let apr = storage::get_yield_apr_bps(env);
    pos.pending_yield += accrued_since(env, pos, apr);
    pos.last_accrual = env.ledger().timestamp();
}

// ============================================================================
// Pool Interaction
// ============================================================================

/// Collect deferred redemptions and accrued yield from the pool.
pub(crate) fn claim(env: &Env, config: &Config, pos: &mut Position) -> i128 {
    let claimable = pos.deferred + pos.pending_yield;
    if claimable > 0 {
        token::Client::new(env, &config.token).transfer(
            &config.staking_pool,
            &env.current_contract_address(),
            &claimable,
        );
        pos.deferred = 0;
        pos.pending_yield = 0;
    }
    claimable
}

/// Move idle tokens into the staked position.
pub(crate) fn stake(env: &Env, config: &Config, pos: &mut Position, amount: i128) {
    if amount <= 0 {
        return;
    }
    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &config.staking_pool,
        &amount,
    );
    pos.staked += amount;
}

/// Instant liquidation: sell staked principal at the discount valuation
/// until `needed` tokens have been produced (or the position runs out).
/// Returns the tokens received.
pub(crate) fn swap_out(
    env: &Env,
    config: &Config,
    pos: &mut Position,
    needed: i128,
    discount: u32,
) -> i128 {
    if needed <= 0 || pos.staked == 0 {
        return 0;
    }
    let consumed = needed
        .fixed_div_ceil(discount as i128, MAX_BPS)
        .unwrap_or(pos.staked)
        .min(pos.staked);
    let received = consumed
        .fixed_mul_floor(discount as i128, MAX_BPS)
        .unwrap_or(0);
    if received > 0 {
        token::Client::new(env, &config.token).transfer(
            &config.staking_pool,
            &env.current_contract_address(),
            &received,
        );
    }
    pos.staked -= consumed;
    received
}

/// Emergency redemption of the whole position at par.
///
/// The pool holds back 0.30% and rebates 0.01% of it, so 0.29% of the
/// position stays deferred until the next pool interaction. Clearing it
/// takes one more harvest.
pub(crate) fn redeem_all(env: &Env, config: &Config, pos: &mut Position) {
    if pos.staked == 0 {
        return;
    }
    let holdback = pos
        .staked
        .fixed_mul_floor((REDEEM_HOLDBACK_BPS - REDEEM_REBATE_BPS) as i128, MAX_BPS)
        .unwrap_or(0);
    let instant = pos.staked - holdback;
    if instant > 0 {
        token::Client::new(env, &config.token).transfer(
            &config.staking_pool,
            &env.current_contract_address(),
            &instant,
        );
    }
    pos.deferred += holdback;
    pos.staked = 0;
}

// ============================================================================
// Valuation
// ============================================================================

/// Position value: staked principal at the discount, deferred at par.
pub(crate) fn valued(pos: &Position, discount: u32) -> i128 {
    pos.staked
        .fixed_mul_floor(discount as i128, MAX_BPS)
        .unwrap_or(0)
        + pos.deferred
}
