use soroban_sdk::{contractevent, Env};

/// Emitted once per completed harvest, after the vault report settled.
#[contractevent]
pub struct Harvested {
    pub profit: i128,
    pub loss: i128,
    pub debt_payment: i128,
    pub credit: i128,
}

// ============================================================================
// Admin Events
// ============================================================================

#[contractevent]
pub struct DoHealthCheckSet {
    pub enabled: bool,
}

#[contractevent]
pub struct RealiseLossesSet {
    pub enabled: bool,
}

#[contractevent]
pub struct BeftmDiscountSet {
    pub discount: u32,
}

// ============================================================================
// Event Emission Helper Functions
// ============================================================================

pub(crate) fn emit_harvested(env: &Env, profit: i128, loss: i128, debt_payment: i128, credit: i128) {
    Harvested {
        profit,
        loss,
        debt_payment,
        credit,
    }
    .publish(env);
}

pub(crate) fn emit_do_health_check_set(env: &Env, enabled: bool) {
    DoHealthCheckSet { enabled }.publish(env);
}

pub(crate) fn emit_realise_losses_set(env: &Env, enabled: bool) {
    RealiseLossesSet { enabled }.publish(env);
}

pub(crate) fn emit_beftm_discount_set(env: &Env, discount: u32) {
    BeftmDiscountSet { discount }.publish(env);
}
