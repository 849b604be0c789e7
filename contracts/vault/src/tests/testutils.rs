#![allow(dead_code)]

use crate::{YieldVault, YieldVaultClient};
use soroban_sdk::testutils::{Address as _, Ledger as _, LedgerInfo};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

// Re-export Error for test usage
pub use crate::errors::Error;

/// One token in 7-decimal base units
pub const SCALAR_7: i128 = 10_000_000;

/// Standard test environment setup
pub fn setup_test_env() -> Env {
    let env = Env::default();

    env.ledger().set(LedgerInfo {
        timestamp: 1441065600, // Sept 1st, 2015 12:00:00 AM UTC
        protocol_version: 23,
        sequence_number: 100,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: u32::MAX / 2,
        min_persistent_entry_ttl: u32::MAX / 2,
        max_entry_ttl: u32::MAX / 2,
    });

    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    env
}

/// Create a token contract for testing
pub fn create_token<'a>(env: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        env,
        &env.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn token_admin_client<'a>(env: &Env, token: &TokenClient) -> StellarAssetClient<'a> {
    StellarAssetClient::new(env, &token.address)
}

/// Register and initialize the vault
pub fn create_vault<'a>(env: &Env, admin: &Address, token: &Address) -> YieldVaultClient<'a> {
    let address = env.register(YieldVault, (admin.clone(), token.clone()));
    YieldVaultClient::new(env, &address)
}

/// Approve the vault to pull `amount` from `from`.
pub fn approve_vault(env: &Env, token: &TokenClient, from: &Address, vault: &Address, amount: i128) {
    let expiry = env.ledger().sequence() + 100_000;
    token.approve(from, vault, &amount, &expiry);
}

// ============================================================================
// Mock Strategy (for withdrawal-pull tests)
// ============================================================================

#[contracttype]
pub enum MockStrategyDataKey {
    /// Vault the mock repays into
    Vault,
    /// Underlying token
    Token,
    /// Loss to report on the next withdraw call
    NextLoss,
}

#[contract]
pub struct MockStrategy;

#[contractimpl]
impl MockStrategy {
    pub fn __constructor(env: Env, vault: Address, token: Address) {
        env.storage().instance().set(&MockStrategyDataKey::Vault, &vault);
        env.storage().instance().set(&MockStrategyDataKey::Token, &token);
    }

    /// Configure the loss reported by the next withdraw call
    pub fn set_next_loss(env: Env, loss: i128) {
        env.storage().instance().set(&MockStrategyDataKey::NextLoss, &loss);
    }

    /// Mock liquidation: send what we hold (less the configured loss) back
    /// to the vault and report the loss.
    pub fn withdraw(env: Env, amount: i128) -> i128 {
        let vault: Address = env
            .storage()
            .instance()
            .get(&MockStrategyDataKey::Vault)
            .unwrap();
        let token_addr: Address = env
            .storage()
            .instance()
            .get(&MockStrategyDataKey::Token)
            .unwrap();
        let loss: i128 = env
            .storage()
            .instance()
            .get(&MockStrategyDataKey::NextLoss)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&MockStrategyDataKey::NextLoss, &0i128);

        let token_client = token::Client::new(&env, &token_addr);
        let me = env.current_contract_address();
        let send = (amount - loss).min(token_client.balance(&me)).max(0);
        if send > 0 {
            token_client.transfer(&me, &vault, &send);
        }
        loss.min(amount)
    }
}

pub fn create_mock_strategy<'a>(
    env: &Env,
    vault: &Address,
    token: &Address,
) -> MockStrategyClient<'a> {
    let address = env.register(MockStrategy, (vault.clone(), token.clone()));
    MockStrategyClient::new(env, &address)
}

// ============================================================================
// Fixture bundling the usual actors and contracts
// ============================================================================

pub struct VaultFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub depositor: Address,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
    pub vault: YieldVaultClient<'a>,
}

pub fn setup_vault_fixture<'a>() -> VaultFixture<'a> {
    let env = setup_test_env();
    let admin = Address::generate(&env);
    let depositor = Address::generate(&env);
    let token = create_token(&env, &admin);
    let token_admin = token_admin_client(&env, &token);
    let vault = create_vault(&env, &admin, &token.address);

    token_admin.mint(&depositor, &(10_000 * SCALAR_7));
    approve_vault(&env, &token, &depositor, &vault.address, 10_000 * SCALAR_7);

    VaultFixture {
        env,
        admin,
        depositor,
        token,
        token_admin,
        vault,
    }
}

// ============================================================================
// Error Testing Utilities
// ============================================================================

/// Assert that a Result contains a specific vault error
pub fn assert_vault_error<T, E>(
    result: &Result<Result<T, E>, Result<Error, soroban_sdk::InvokeError>>,
    expected_error: Error,
) {
    match result {
        Err(Ok(actual_error)) => {
            assert_eq!(
                *actual_error, expected_error,
                "Expected error {:?} (code {}), but got {:?} (code {})",
                expected_error, expected_error as u32, actual_error, *actual_error as u32
            );
        }
        Err(Err(_invoke_error)) => {
            panic!(
                "Expected contract error {:?} (code {}), but got invocation error",
                expected_error, expected_error as u32
            );
        }
        Ok(Err(_conv_error)) => {
            panic!(
                "Expected contract error {:?} (code {}), but got conversion error",
                expected_error, expected_error as u32
            );
        }
        Ok(Ok(_)) => {
            panic!(
                "Expected error {:?} (code {}), but operation succeeded",
                expected_error, expected_error as u32
            );
        }
    }
}
