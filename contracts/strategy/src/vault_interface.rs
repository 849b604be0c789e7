// External vault surface, as seen from the strategy.
//
// Client trait definition rather than a wasm import, mirroring how the vault
// crate declares its strategy interface.

#[allow(dead_code)]
#[soroban_sdk::contractargs(name = "VaultArgs")]
#[soroban_sdk::contractclient(name = "VaultClient")]
pub trait Vault {
    fn strategies(env: soroban_sdk::Env, strategy: soroban_sdk::Address) -> StrategyParams;

    fn debt_outstanding(env: soroban_sdk::Env, strategy: soroban_sdk::Address) -> i128;

    fn emergency_shutdown(env: soroban_sdk::Env) -> bool;

    /// Settle a harvest. `gain + debt_payment` tokens must have been
    /// transferred to the vault beforehand. Returns the credit paid out.
    fn report(
        env: soroban_sdk::Env,
        strategy: soroban_sdk::Address,
        gain: i128,
        loss: i128,
        debt_payment: i128,
    ) -> i128;
}

/// Per-strategy accounting record, as stored by the vault.
#[soroban_sdk::contracttype(export = false)]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StrategyParams {
    pub activation: u64,
    pub debt_ratio: u32,
    pub total_debt: i128,
    pub total_gain: i128,
    pub total_loss: i128,
    pub last_report: u64,
}
