// External strategy surface, as seen from the vault.
//
// Defined as a client trait rather than a wasm import so the vault crate does
// not depend on the strategy crate (which already depends on this one).

#[allow(dead_code)]
#[soroban_sdk::contractargs(name = "StrategyArgs")]
#[soroban_sdk::contractclient(name = "StrategyClient")]
pub trait Strategy {
    /// Liquidate up to `amount` tokens back to the vault. Returns the loss
    /// realized while doing so (zero when the position covers the request).
    fn withdraw(env: soroban_sdk::Env, amount: i128) -> i128;
}
