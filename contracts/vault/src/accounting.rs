use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{token, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::{StrategyParams, MAX_BPS};

// ============================================================================
// Asset Accounting
// ============================================================================

/// Tokens sitting idle on the vault itself.
pub(crate) fn idle_balance(env: &Env) -> i128 {
    let config = storage::get_config(env);
    token::Client::new(env, &config.token).balance(&env.current_contract_address())
}

/// Total assets under management: idle balance plus everything lent out.
pub(crate) fn total_assets(env: &Env) -> i128 {
    idle_balance(env) + storage::get_total_debt(env)
}

/// The debt a strategy is entitled to, per its configured ratio.
pub(crate) fn debt_limit(env: &Env, params: &StrategyParams) -> i128 {
    total_assets(env)
        .fixed_mul_floor(params.debt_ratio as i128, MAX_BPS)
        .unwrap_or(0)
}

/// Credit the vault is willing to extend to the strategy right now.
///
/// Zero during shutdown. Otherwise the gap between the strategy's debt limit
/// and its current debt, clamped to what the vault actually holds.
pub(crate) fn credit_available(env: &Env, params: &StrategyParams) -> i128 {
    if storage::get_shutdown(env) {
        return 0;
    }
    let limit = debt_limit(env, params);
    if params.total_debt >= limit {
        return 0;
    }
    (limit - params.total_debt).min(idle_balance(env))
}

/// Debt the strategy is expected to return at its next report.
///
/// During shutdown every allocated token is outstanding.
pub(crate) fn debt_outstanding(env: &Env, params: &StrategyParams) -> i128 {
    if storage::get_shutdown(env) {
        return params.total_debt;
    }
    let limit = debt_limit(env, params);
    if params.total_debt <= limit {
        0
    } else {
        params.total_debt - limit
    }
}

// ============================================================================
// Share Math
// ============================================================================

/// Shares minted for a deposit of `amount` tokens.
pub(crate) fn shares_for_deposit(amount: i128, supply: i128, assets: i128) -> Result<i128, Error> {
    if supply == 0 || assets == 0 {
        return Ok(amount);
    }
    amount
        .fixed_mul_floor(supply, assets)
        .ok_or(Error::OverflowError)
}

/// Token value of `shares` at the current share price.
pub(crate) fn value_of_shares(shares: i128, supply: i128, assets: i128) -> Result<i128, Error> {
    if supply == 0 {
        return Ok(0);
    }
    shares
        .fixed_mul_floor(assets, supply)
        .ok_or(Error::OverflowError)
}
