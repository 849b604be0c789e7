//! Point-in-time accounting reads across the vault and strategy.

use soroban_sdk::{token, Address, Env};
use yield_strategy::YieldStrategyClient;
use yield_vault::YieldVaultClient;

/// Everything a scenario compares before and after a harvest.
///
/// Immutable once captured; scenarios only diff two of these.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AccountingSnapshot {
    /// Configured allocation of the strategy, in basis points
    pub debt_ratio: u32,

    /// Lifetime gain recorded against the strategy
    pub total_gain: i128,

    /// Lifetime loss recorded against the strategy
    pub total_loss: i128,

    /// Debt currently booked against the strategy
    pub total_debt: i128,

    /// Vault loose balance plus everything lent out
    pub vault_total_assets: i128,

    /// Aggregate debt across all strategies
    pub vault_total_debt: i128,

    /// Strategy's own valuation of its holdings
    pub estimated_total_assets: i128,

    /// Loose tokens sitting on the strategy contract
    pub strategy_balance: i128,

    /// Credit the vault would extend to the strategy right now
    pub credit_available: i128,
}

impl AccountingSnapshot {
    pub fn capture(env: &Env, token: &Address, vault: &Address, strategy: &Address) -> Self {
        let vault_client = YieldVaultClient::new(env, vault);
        let strategy_client = YieldStrategyClient::new(env, strategy);
        let params = vault_client.strategies(strategy);

        Self {
            debt_ratio: params.debt_ratio,
            total_gain: params.total_gain,
            total_loss: params.total_loss,
            total_debt: params.total_debt,
            vault_total_assets: vault_client.total_assets(),
            vault_total_debt: vault_client.total_debt(),
            estimated_total_assets: strategy_client.estimated_total_assets(),
            strategy_balance: token::Client::new(env, token).balance(strategy),
            credit_available: vault_client.credit_available(strategy),
        }
    }
}
