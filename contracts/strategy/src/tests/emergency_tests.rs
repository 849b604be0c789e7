use crate::tests::testutils::*;
use crate::types::{MAX_BPS, REDEEM_HOLDBACK_BPS, REDEEM_REBATE_BPS};

/// Share of the position the pool keeps back on an emergency redemption.
fn holdback(staked: i128) -> i128 {
    staked * (REDEEM_HOLDBACK_BPS - REDEEM_REBATE_BPS) as i128 / MAX_BPS
}

#[test]
fn test_shutdown_redemption_defers_holdback() {
    let f = setup_strategy_fixture();
    deposit_and_invest(&f);

    f.vault.set_emergency_shutdown(&true);
    f.strategy.harvest();

    let held = holdback(AMOUNT);
    let pos = f.strategy.position();
    assert_eq!(pos.staked, 0);
    assert_eq!(pos.deferred, held);
    // everything redeemable went back to the vault in one report
    assert_eq!(f.token.balance(&f.strategy.address), 0);
    assert_eq!(f.token.balance(&f.vault.address), AMOUNT - held);
    assert_eq!(f.vault.total_debt(), held);
    assert_eq!(f.strategy.estimated_total_assets(), held);
}

#[test]
fn test_second_harvest_clears_deferred() {
    let f = setup_strategy_fixture();
    deposit_and_invest(&f);

    f.vault.set_emergency_shutdown(&true);
    f.strategy.harvest();
    f.strategy.harvest();

    assert_eq!(f.vault.total_debt(), 0);
    assert_eq!(f.token.balance(&f.vault.address), AMOUNT);
    assert_eq!(f.strategy.estimated_total_assets(), 0);
    assert_eq!(f.token.balance(&f.strategy.address), 0);

    // depositors get their full principal back
    f.vault.withdraw(&f.depositor, &None);
    assert_eq!(f.token.balance(&f.depositor), 10 * AMOUNT);
    assert_eq!(f.vault.total_supply(), 0);
}

#[test]
fn test_shutdown_harvest_skips_restaking() {
    let f = setup_strategy_fixture();
    deposit_and_invest(&f);

    // yield claimed during shutdown must not be reinvested
    sleep(&f.env, 3_600);
    f.vault.set_emergency_shutdown(&true);
    f.strategy.set_do_health_check(&false);
    f.strategy.harvest();

    assert_eq!(f.strategy.position().staked, 0);
}
