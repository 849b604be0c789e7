use soroban_sdk::{contractevent, Address, Env};

// ============================================================================
// Depositor Events
// ============================================================================

#[contractevent]
pub struct Deposited {
    #[topic]
    pub depositor: Address,
    pub amount: i128,
    pub shares: i128,
}

#[contractevent]
pub struct Withdrawn {
    #[topic]
    pub depositor: Address,
    pub shares: i128,
    pub value: i128,
    pub loss: i128,
}

// ============================================================================
// Strategy Events
// ============================================================================

#[contractevent]
pub struct StrategyAdded {
    #[topic]
    pub strategy: Address,
    pub debt_ratio: u32,
}

#[contractevent]
pub struct DebtRatioUpdated {
    #[topic]
    pub strategy: Address,
    pub debt_ratio: u32,
}

/// Emitted once per strategy report, after credit has been paid out.
#[contractevent]
pub struct StrategyReported {
    #[topic]
    pub strategy: Address,
    pub gain: i128,
    pub loss: i128,
    pub debt_payment: i128,
    pub total_debt: i128,
    pub credit: i128,
}

// ============================================================================
// Admin Events
// ============================================================================

#[contractevent]
pub struct EmergencyShutdownSet {
    pub active: bool,
}

// ============================================================================
// Event Emission Helper Functions
// ============================================================================

pub(crate) fn emit_deposited(env: &Env, depositor: &Address, amount: i128, shares: i128) {
    Deposited {
        depositor: depositor.clone(),
        amount,
        shares,
    }
    .publish(env);
}

pub(crate) fn emit_withdrawn(env: &Env, depositor: &Address, shares: i128, value: i128, loss: i128) {
    Withdrawn {
        depositor: depositor.clone(),
        shares,
        value,
        loss,
    }
    .publish(env);
}

pub(crate) fn emit_strategy_added(env: &Env, strategy: &Address, debt_ratio: u32) {
    StrategyAdded {
        strategy: strategy.clone(),
        debt_ratio,
    }
    .publish(env);
}

pub(crate) fn emit_debt_ratio_updated(env: &Env, strategy: &Address, debt_ratio: u32) {
    DebtRatioUpdated {
        strategy: strategy.clone(),
        debt_ratio,
    }
    .publish(env);
}

pub(crate) fn emit_strategy_reported(
    env: &Env,
    strategy: &Address,
    gain: i128,
    loss: i128,
    debt_payment: i128,
    total_debt: i128,
    credit: i128,
) {
    StrategyReported {
        strategy: strategy.clone(),
        gain,
        loss,
        debt_payment,
        total_debt,
        credit,
    }
    .publish(env);
}

pub(crate) fn emit_emergency_shutdown_set(env: &Env, active: bool) {
    EmergencyShutdownSet { active }.publish(env);
}
