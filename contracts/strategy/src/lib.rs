#![no_std]

//! # Yield Strategy
//!
//! Invests vault credit into a staking pool and reports profit and loss back
//! through `vault.report` on every harvest.
//!
//! Stands in for the production staker strategy the scenario suite drives:
//! yield accrues linearly with elapsed ledger time, ordinary liquidation is
//! instant at the `beftm_discount` valuation, and emergency redemption (vault
//! shutdown) releases everything at par except a 0.29% holdback the pool only
//! frees on the next interaction, so a full unwind takes two harvests.

use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contract, contractimpl, token, Address, Env};

mod errors;
mod events;
mod position;
mod storage;
mod types;

// External contract type definitions
mod vault_interface;

use errors::Error;
use types::{Config, Position, LOSS_LIMIT_BPS, MAX_BPS, PROFIT_LIMIT_BPS};
use vault_interface::VaultClient;

// ============================================================================
// Contract Definition
// ============================================================================

#[contract]
pub struct YieldStrategy;

#[contractimpl]
impl YieldStrategy {
    /// Initialize the strategy
    ///
    /// # Arguments
    /// * `admin` - Governance/keeper address (harvests, toggles)
    /// * `vault` - Vault this strategy reports to
    /// * `token` - Underlying asset
    /// * `staking_pool` - Pool address holding the invested position
    /// * `yield_apr_bps` - Simulated pool APR in basis points
    pub fn __constructor(
        env: Env,
        admin: Address,
        vault: Address,
        token: Address,
        staking_pool: Address,
        yield_apr_bps: u32,
    ) {
        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &Config {
                vault,
                token,
                staking_pool,
            },
        );
        storage::set_yield_apr_bps(&env, yield_apr_bps);
        storage::set_position(
            &env,
            &Position {
                staked: 0,
                deferred: 0,
                pending_yield: 0,
                last_accrual: env.ledger().timestamp(),
            },
        );
        storage::extend_instance_ttl(&env);
    }

    // ========================================================================
    // Harvest
    // ========================================================================

    /// Realize profit or loss against the vault's recorded debt and settle
    /// through `vault.report`.
    ///
    /// Order of operations: claim pool payouts, unwind whatever the vault
    /// calls outstanding (full emergency redemption during shutdown),
    /// compute P&L, realize profit into idle tokens, health-check, transfer
    /// `profit + debt_payment` to the vault, report, and re-stake any credit
    /// received. Never re-stakes during shutdown.
    ///
    /// # Errors
    /// * `HealthCheckFailed` - profit/loss outside bounds while the check
    ///   is armed
    pub fn harvest(env: Env) -> Result<(), Error> {
        storage::get_admin(&env).require_auth();
        let config = storage::get_config(&env);
        let token_client = token::Client::new(&env, &config.token);
        let me = env.current_contract_address();

        let mut pos = storage::get_position(&env);
        position::accrue(&env, &mut pos);
        position::claim(&env, &config, &mut pos);

        let vault = VaultClient::new(&env, &config.vault);
        let params = vault.strategies(&me);
        let debt = params.total_debt;
        let outstanding = vault.debt_outstanding(&me);
        let shutdown = vault.emergency_shutdown();
        let discount = storage::get_beftm_discount(&env);

        if shutdown {
            position::redeem_all(&env, &config, &mut pos);
        } else {
            let idle = token_client.balance(&me);
            if outstanding > idle {
                position::swap_out(&env, &config, &mut pos, outstanding - idle, discount);
            }
        }

        let idle = token_client.balance(&me);
        let total_value = idle + position::valued(&pos, discount);
        let (profit_target, mut loss) = if total_value >= debt {
            (total_value - debt, 0)
        } else {
            (0, debt - total_value)
        };
        if loss > 0 && !storage::get_realise_losses(&env) {
            // hold the discounted position instead of recognizing the
            // shortfall
            loss = 0;
        }

        let debt_payment = outstanding.min(idle);
        let mut liquid = idle - debt_payment;
        if profit_target > liquid && !shutdown {
            position::swap_out(&env, &config, &mut pos, profit_target - liquid, discount);
            liquid = token_client.balance(&me) - debt_payment;
        }
        let profit = profit_target.min(liquid).max(0);

        let armed = storage::get_do_health_check(&env);
        if armed {
            check_harvest_health(profit, loss, debt)?;
        }

        let to_vault = profit + debt_payment;
        if to_vault > 0 {
            token_client.transfer(&me, &config.vault, &to_vault);
        }
        let credit = vault.report(&me, &profit, &loss, &debt_payment);

        if !shutdown && params.debt_ratio > 0 {
            let idle = token_client.balance(&me);
            position::stake(&env, &config, &mut pos, idle);
        }
        storage::set_position(&env, &pos);
        if !armed {
            // the off switch only covers a single harvest
            storage::set_do_health_check(&env, true);
        }
        storage::extend_instance_ttl(&env);

        events::emit_harvested(&env, profit, loss, debt_payment, credit);
        Ok(())
    }

    /// Liquidate up to `amount` tokens back to the vault (vault only).
    ///
    /// Idle tokens go first, then the staked position is sold at the
    /// discount valuation. Returns the shortfall as loss.
    pub fn withdraw(env: Env, amount: i128) -> Result<i128, Error> {
        let config = storage::get_config(&env);
        config.vault.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let token_client = token::Client::new(&env, &config.token);
        let me = env.current_contract_address();

        let mut pos = storage::get_position(&env);
        position::accrue(&env, &mut pos);

        let idle = token_client.balance(&me);
        if idle < amount {
            let discount = storage::get_beftm_discount(&env);
            position::swap_out(&env, &config, &mut pos, amount - idle, discount);
        }
        let send = amount.min(token_client.balance(&me));
        if send > 0 {
            token_client.transfer(&me, &config.vault, &send);
        }
        storage::set_position(&env, &pos);
        Ok(amount - send)
    }

    // ========================================================================
    // Admin Toggles
    // ========================================================================

    /// Arm or disarm the harvest health check. Disarming covers exactly one
    /// harvest; the flag re-arms after it completes.
    pub fn set_do_health_check(env: Env, enabled: bool) {
        storage::get_admin(&env).require_auth();
        storage::set_do_health_check(&env, enabled);
        events::emit_do_health_check_set(&env, enabled);
    }

    /// Control whether shortfalls against debt are reported as losses.
    pub fn set_realise_losses(env: Env, enabled: bool) {
        storage::get_admin(&env).require_auth();
        storage::set_realise_losses(&env, enabled);
        events::emit_realise_losses_set(&env, enabled);
    }

    /// Set the valuation discount (basis points) on the staked derivative.
    ///
    /// # Errors
    /// * `InvalidDiscount` - outside (0, 10_000]
    pub fn set_beftm_discount(env: Env, discount: u32) -> Result<(), Error> {
        storage::get_admin(&env).require_auth();
        if discount == 0 || discount as i128 > MAX_BPS {
            return Err(Error::InvalidDiscount);
        }
        storage::set_beftm_discount(&env, discount);
        events::emit_beftm_discount_set(&env, discount);
        Ok(())
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Everything the strategy holds, valued at the discount: idle tokens,
    /// staked principal, deferred redemptions, and accrued yield.
    pub fn estimated_total_assets(env: Env) -> i128 {
        let config = storage::get_config(&env);
        let pos = storage::get_position(&env);
        let apr = storage::get_yield_apr_bps(&env);
        let discount = storage::get_beftm_discount(&env);
        let idle =
            token::Client::new(&env, &config.token).balance(&env.current_contract_address());
        idle + position::valued(&pos, discount)
            + pos.pending_yield
            + position::accrued_since(&env, &pos, apr)
    }

    pub fn beftm_discount(env: Env) -> u32 {
        storage::get_beftm_discount(&env)
    }

    pub fn do_health_check(env: Env) -> bool {
        storage::get_do_health_check(&env)
    }

    pub fn realise_losses(env: Env) -> bool {
        storage::get_realise_losses(&env)
    }

    pub fn position(env: Env) -> Position {
        storage::get_position(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }
}

// ============================================================================
// Health Check
// ============================================================================

fn check_harvest_health(profit: i128, loss: i128, debt: i128) -> Result<(), Error> {
    let profit_limit = debt
        .fixed_mul_floor(PROFIT_LIMIT_BPS, MAX_BPS)
        .ok_or(Error::OverflowError)?;
    let loss_limit = debt
        .fixed_mul_floor(LOSS_LIMIT_BPS, MAX_BPS)
        .ok_or(Error::OverflowError)?;
    if profit > profit_limit || loss > loss_limit {
        return Err(Error::HealthCheckFailed);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
