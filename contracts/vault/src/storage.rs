use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Config, StrategyParams};

// ============================================================================
// Storage Keys
// ============================================================================
// Instance: Admin, Config, Shutdown, TotalSupply, TotalDebt, DebtRatio, Queue
// Persistent: Balance, Strategy

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Admin (governance) address - singleton
    Admin,

    /// Global configuration - singleton
    Config,

    /// Emergency shutdown flag - singleton
    Shutdown,

    /// Total share supply - singleton
    TotalSupply,

    /// Sum of all strategy debt - singleton
    TotalDebt,

    /// Aggregate debt ratio across strategies, in basis points - singleton
    DebtRatio,

    /// Ordered list of strategies to pull withdrawals from - singleton
    Queue,

    /// Share balance - Balance(depositor) -> i128
    Balance(Address),

    /// Strategy accounting - Strategy(strategy) -> StrategyParams
    Strategy(Address),
}

const TTL_THRESHOLD: u32 = 518_400; // ~30 days of ledgers
const TTL_BUMP: u32 = 1_036_800; // ~60 days of ledgers

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_BUMP);
}

// ============================================================================
// Singletons
// ============================================================================

pub(crate) fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Admin not set")
}

pub(crate) fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub(crate) fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Config not set")
}

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn get_shutdown(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Shutdown)
        .unwrap_or(false)
}

pub(crate) fn set_shutdown(env: &Env, active: bool) {
    env.storage().instance().set(&DataKey::Shutdown, &active);
}

pub(crate) fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub(crate) fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub(crate) fn get_total_debt(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDebt)
        .unwrap_or(0)
}

pub(crate) fn set_total_debt(env: &Env, debt: i128) {
    env.storage().instance().set(&DataKey::TotalDebt, &debt);
}

pub(crate) fn get_debt_ratio(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DebtRatio)
        .unwrap_or(0)
}

pub(crate) fn set_debt_ratio(env: &Env, ratio: u32) {
    env.storage().instance().set(&DataKey::DebtRatio, &ratio);
}

pub(crate) fn get_queue(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Queue)
        .unwrap_or_else(|| Vec::new(env))
}

pub(crate) fn set_queue(env: &Env, queue: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Queue, queue);
}

// ============================================================================
// Share Balances
// ============================================================================

pub(crate) fn get_balance(env: &Env, depositor: &Address) -> i128 {
    let key = DataKey::Balance(depositor.clone());
    let result = env.storage().persistent().get(&key).unwrap_or(0);
    if result != 0 {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_BUMP);
    }
    result
}

pub(crate) fn set_balance(env: &Env, depositor: &Address, balance: i128) {
    let key = DataKey::Balance(depositor.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_BUMP);
}

// ============================================================================
// Strategy Records
// ============================================================================

pub(crate) fn get_strategy(env: &Env, strategy: &Address) -> Option<StrategyParams> {
    let key = DataKey::Strategy(strategy.clone());
    let result: Option<StrategyParams> = env.storage().persistent().get(&key);
    if result.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_BUMP);
    }
    result
}

pub(crate) fn set_strategy(env: &Env, strategy: &Address, params: &StrategyParams) {
    let key = DataKey::Strategy(strategy.clone());
    env.storage().persistent().set(&key, params);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_BUMP);
}
