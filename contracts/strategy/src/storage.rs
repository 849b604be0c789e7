use soroban_sdk::{contracttype, Env};

use crate::types::{Config, Position, MAX_BPS};

// ============================================================================
// Storage Keys
// ============================================================================
// Everything is a singleton, so instance storage covers all of it.

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Admin (governance/keeper) address
    Admin,

    /// Strategy wiring
    Config,

    /// The invested position
    Position,

    /// Whether the next harvest runs the health check
    DoHealthCheck,

    /// Whether shortfalls against debt are reported as losses
    RealiseLosses,

    /// Valuation discount on the staked derivative, in basis points
    BeftmDiscount,

    /// Simulated pool APR, in basis points
    YieldAprBps,
}

const TTL_THRESHOLD: u32 = 518_400;
const TTL_BUMP: u32 = 1_036_800;

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_BUMP);
}

pub(crate) fn get_admin(env: &Env) -> soroban_sdk::Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Admin not set")
}

pub(crate) fn set_admin(env: &Env, admin: &soroban_sdk::Address) {
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

pub(crate) fn get_position(env: &Env) -> Position {
    env.storage()
        .instance()
        .get(&DataKey::Position)
        .unwrap_or(Position {
            staked: 0,
            deferred: 0,
            pending_yield: 0,
            last_accrual: 0,
        })
}

pub(crate) fn set_position(env: &Env, position: &Position) {
    env.storage().instance().set(&DataKey::Position, position);
}

pub(crate) fn get_do_health_check(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::DoHealthCheck)
        .unwrap_or(true)
}

pub(crate) fn set_do_health_check(env: &Env, enabled: bool) {
    env.storage()
        .instance()
        .set(&DataKey::DoHealthCheck, &enabled);
}

pub(crate) fn get_realise_losses(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::RealiseLosses)
        .unwrap_or(false)
}

pub(crate) fn set_realise_losses(env: &Env, enabled: bool) {
    env.storage()
        .instance()
        .set(&DataKey::RealiseLosses, &enabled);
}

pub(crate) fn get_beftm_discount(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BeftmDiscount)
        .unwrap_or(MAX_BPS as u32)
}

pub(crate) fn set_beftm_discount(env: &Env, discount: u32) {
    env.storage()
        .instance()
        .set(&DataKey::BeftmDiscount, &discount);
}

pub(crate) fn get_yield_apr_bps(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::YieldAprBps)
        .unwrap_or(0)
}

pub(crate) fn set_yield_apr_bps(env: &Env, apr: u32) {
    env.storage().instance().set(&DataKey::YieldAprBps, &apr);
}
