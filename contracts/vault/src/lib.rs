#![no_std]

//! # Yield Vault
//!
//! Depositor funds are pooled into shares and allocated to strategies by
//! debt ratio. Strategies report gains and losses back through `report`,
//! which settles debt and pays out fresh credit in one step.
//!
//! Stands in for the production vault the scenario suite was written
//! against; the call surface and accounting rules match what the scenarios
//! observe (share pricing, per-strategy debt bookkeeping, credit and
//! outstanding-debt queries, emergency shutdown).

use soroban_sdk::{contract, contractimpl, token, Address, Env};

mod accounting;
mod errors;
mod events;
mod storage;
mod types;

// External contract type definitions
mod strategy_interface;

use errors::Error;
use strategy_interface::StrategyClient;
use types::{Config, StrategyParams, MAX_BPS};

// ============================================================================
// Contract Definition
// ============================================================================

#[contract]
pub struct YieldVault;

#[contractimpl]
impl YieldVault {
    /// Initialize the vault
    ///
    /// # Arguments
    /// * `admin` - Governance address (strategy management, shutdown)
    /// * `token` - Underlying asset the vault accepts
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        storage::set_admin(&env, &admin);
        storage::set_config(&env, &Config { token });
        storage::extend_instance_ttl(&env);
    }

    // ========================================================================
    // Depositor Operations
    // ========================================================================

    /// Deposit `amount` tokens and mint shares at the current share price.
    ///
    /// Pulls the tokens via the token allowance, so the depositor must have
    /// approved the vault first.
    ///
    /// # Errors
    /// * `InvalidAmount` - amount is zero or negative
    /// * `VaultShutdown` - deposits are blocked during shutdown
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, Error> {
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::get_shutdown(&env) {
            return Err(Error::VaultShutdown);
        }

        let supply = storage::get_total_supply(&env);
        let assets = accounting::total_assets(&env);
        let shares = accounting::shares_for_deposit(amount, supply, assets)?;

        let config = storage::get_config(&env);
        let vault = env.current_contract_address();
        token::Client::new(&env, &config.token).transfer_from(&vault, &from, &vault, &amount);

        storage::set_balance(&env, &from, storage::get_balance(&env, &from) + shares);
        storage::set_total_supply(&env, supply + shares);
        storage::extend_instance_ttl(&env);

        events::emit_deposited(&env, &from, amount, shares);
        Ok(shares)
    }

    /// Redeem shares for underlying tokens.
    ///
    /// `max_shares` of `None` redeems the caller's full balance. Idle vault
    /// balance is paid out first; any shortfall is pulled from the strategy
    /// withdrawal queue, and losses realized while liquidating reduce the
    /// amount received.
    ///
    /// # Errors
    /// * `InvalidAmount` - share count is zero or negative
    /// * `InsufficientShares` - caller holds fewer shares than requested
    pub fn withdraw(env: Env, from: Address, max_shares: Option<i128>) -> Result<i128, Error> {
        from.require_auth();
        let balance = storage::get_balance(&env, &from);
        let shares = max_shares.unwrap_or(balance);
        if shares <= 0 {
            return Err(Error::InvalidAmount);
        }
        if shares > balance {
            return Err(Error::InsufficientShares);
        }

        let supply = storage::get_total_supply(&env);
        let assets = accounting::total_assets(&env);
        let mut value = accounting::value_of_shares(shares, supply, assets)?;

        let config = storage::get_config(&env);
        let token_client = token::Client::new(&env, &config.token);
        let vault = env.current_contract_address();
        let mut total_loss = 0i128;

        if value > token_client.balance(&vault) {
            // Pull the shortfall from strategies, front of the queue first.
            for strategy in storage::get_queue(&env).iter() {
                let idle = token_client.balance(&vault);
                if value <= idle {
                    break;
                }
                let Some(mut params) = storage::get_strategy(&env, &strategy) else {
                    continue;
                };
                let needed = (value - idle).min(params.total_debt);
                if needed <= 0 {
                    continue;
                }
                let loss = StrategyClient::new(&env, &strategy).withdraw(&needed);
                let withdrawn = token_client.balance(&vault) - idle;
                if loss > 0 {
                    value -= loss;
                    total_loss += loss;
                    params.total_loss += loss;
                }
                let reduction = (withdrawn + loss).min(params.total_debt);
                params.total_debt -= reduction;
                storage::set_strategy(&env, &strategy, &params);
                storage::set_total_debt(&env, storage::get_total_debt(&env) - reduction);
            }
            let idle = token_client.balance(&vault);
            if value > idle {
                value = idle;
            }
        }

        storage::set_balance(&env, &from, balance - shares);
        storage::set_total_supply(&env, supply - shares);
        token_client.transfer(&vault, &from, &value);

        events::emit_withdrawn(&env, &from, shares, value, total_loss);
        Ok(value)
    }

    // ========================================================================
    // Strategy Management
    // ========================================================================

    /// Add a strategy with the given debt ratio (basis points).
    ///
    /// # Errors
    /// * `StrategyAlreadyActive` - strategy was already added
    /// * `DebtRatioTooHigh` - aggregate ratio would exceed 10_000
    /// * `VaultShutdown` - no new strategies during shutdown
    pub fn add_strategy(env: Env, strategy: Address, debt_ratio: u32) -> Result<(), Error> {
        storage::get_admin(&env).require_auth();
        if storage::get_shutdown(&env) {
            return Err(Error::VaultShutdown);
        }
        if storage::get_strategy(&env, &strategy).is_some() {
            return Err(Error::StrategyAlreadyActive);
        }
        let aggregate = storage::get_debt_ratio(&env) + debt_ratio;
        if aggregate as i128 > MAX_BPS {
            return Err(Error::DebtRatioTooHigh);
        }

        let now = env.ledger().timestamp();
        storage::set_strategy(
            &env,
            &strategy,
            &StrategyParams {
                activation: now,
                debt_ratio,
                total_debt: 0,
                total_gain: 0,
                total_loss: 0,
                last_report: now,
            },
        );
        storage::set_debt_ratio(&env, aggregate);
        let mut queue = storage::get_queue(&env);
        queue.push_back(strategy.clone());
        storage::set_queue(&env, &queue);

        events::emit_strategy_added(&env, &strategy, debt_ratio);
        Ok(())
    }

    /// Change a strategy's debt ratio.
    ///
    /// The configured value is reported back verbatim by `strategies()`;
    /// nothing else ever mutates it.
    pub fn update_strategy_debt_ratio(
        env: Env,
        strategy: Address,
        debt_ratio: u32,
    ) -> Result<(), Error> {
        storage::get_admin(&env).require_auth();
        let mut params = storage::get_strategy(&env, &strategy).ok_or(Error::StrategyNotActive)?;
        let aggregate = storage::get_debt_ratio(&env) - params.debt_ratio + debt_ratio;
        if aggregate as i128 > MAX_BPS {
            return Err(Error::DebtRatioTooHigh);
        }
        params.debt_ratio = debt_ratio;
        storage::set_strategy(&env, &strategy, &params);
        storage::set_debt_ratio(&env, aggregate);

        events::emit_debt_ratio_updated(&env, &strategy, debt_ratio);
        Ok(())
    }

    /// Toggle emergency shutdown.
    ///
    /// While active: deposits revert, credit lines drop to zero, and every
    /// strategy's full debt becomes outstanding.
    pub fn set_emergency_shutdown(env: Env, active: bool) {
        storage::get_admin(&env).require_auth();
        storage::set_shutdown(&env, active);
        events::emit_emergency_shutdown_set(&env, active);
    }

    // ========================================================================
    // Strategy Reporting
    // ========================================================================

    /// Settle a strategy's harvest.
    ///
    /// The strategy must transfer `gain + debt_payment` tokens to the vault
    /// before calling. Gains and losses accumulate on the strategy record,
    /// `debt_payment` retires outstanding debt, and any credit now available
    /// is transferred back to the strategy. Returns the credit paid out.
    ///
    /// # Errors
    /// * `StrategyNotActive` - caller was never added
    /// * `InvalidAmount` - a negative figure was reported
    /// * `LossTooHigh` - loss exceeds the strategy's recorded debt
    pub fn report(
        env: Env,
        strategy: Address,
        gain: i128,
        loss: i128,
        debt_payment: i128,
    ) -> Result<i128, Error> {
        strategy.require_auth();
        let mut params = storage::get_strategy(&env, &strategy).ok_or(Error::StrategyNotActive)?;
        if gain < 0 || loss < 0 || debt_payment < 0 {
            return Err(Error::InvalidAmount);
        }
        if loss > params.total_debt {
            return Err(Error::LossTooHigh);
        }

        let mut total_debt = storage::get_total_debt(&env);
        if loss > 0 {
            params.total_loss += loss;
            params.total_debt -= loss;
            total_debt -= loss;
        }
        params.total_gain += gain;

        let payment = debt_payment.min(params.total_debt);
        params.total_debt -= payment;
        total_debt -= payment;
        storage::set_total_debt(&env, total_debt);

        let credit = accounting::credit_available(&env, &params);
        if credit > 0 {
            let config = storage::get_config(&env);
            token::Client::new(&env, &config.token).transfer(
                &env.current_contract_address(),
                &strategy,
                &credit,
            );
            params.total_debt += credit;
            storage::set_total_debt(&env, total_debt + credit);
        }

        params.last_report = env.ledger().timestamp();
        storage::set_strategy(&env, &strategy, &params);
        storage::extend_instance_ttl(&env);

        events::emit_strategy_reported(
            &env,
            &strategy,
            gain,
            loss,
            payment,
            params.total_debt,
            credit,
        );
        Ok(credit)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Accounting record for a strategy.
    pub fn strategies(env: Env, strategy: Address) -> Result<StrategyParams, Error> {
        storage::get_strategy(&env, &strategy).ok_or(Error::StrategyNotActive)
    }

    /// Idle balance plus everything lent to strategies.
    pub fn total_assets(env: Env) -> i128 {
        accounting::total_assets(&env)
    }

    /// Sum of all strategy debt.
    pub fn total_debt(env: Env) -> i128 {
        storage::get_total_debt(&env)
    }

    /// Credit the vault would extend to the strategy right now.
    pub fn credit_available(env: Env, strategy: Address) -> i128 {
        match storage::get_strategy(&env, &strategy) {
            Some(params) => accounting::credit_available(&env, &params),
            None => 0,
        }
    }

    /// Debt the strategy is expected to return at its next report.
    pub fn debt_outstanding(env: Env, strategy: Address) -> i128 {
        match storage::get_strategy(&env, &strategy) {
            Some(params) => accounting::debt_outstanding(&env, &params),
            None => 0,
        }
    }

    pub fn balance_of(env: Env, depositor: Address) -> i128 {
        storage::get_balance(&env, &depositor)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn emergency_shutdown(env: Env) -> bool {
        storage::get_shutdown(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
