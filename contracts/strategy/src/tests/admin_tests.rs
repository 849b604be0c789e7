use crate::tests::testutils::*;

#[test]
fn test_vault_withdrawal_pulls_from_position() {
    let f = setup_strategy_fixture();
    deposit_and_invest(&f);

    // half the shares, liquidated at par
    f.vault.withdraw(&f.depositor, &Some(AMOUNT / 2));

    assert_eq!(f.token.balance(&f.depositor), 9 * AMOUNT + AMOUNT / 2);
    assert_eq!(f.strategy.position().staked, AMOUNT / 2);
    assert_eq!(f.vault.total_debt(), AMOUNT / 2);
    assert_eq!(f.vault.strategies(&f.strategy.address).total_loss, 0);
}

#[test]
fn test_withdraw_rejects_bad_amount() {
    let f = setup_strategy_fixture();
    deposit_and_invest(&f);

    let result = f.strategy.try_withdraw(&0);
    assert_strategy_error(&result, Error::InvalidAmount);
    let result = f.strategy.try_withdraw(&-1);
    assert_strategy_error(&result, Error::InvalidAmount);
}

#[test]
fn test_discount_bounds() {
    let f = setup_strategy_fixture();

    assert_eq!(f.strategy.beftm_discount(), 10_000);

    let result = f.strategy.try_set_beftm_discount(&0);
    assert_strategy_error(&result, Error::InvalidDiscount);
    let result = f.strategy.try_set_beftm_discount(&10_001);
    assert_strategy_error(&result, Error::InvalidDiscount);

    f.strategy.set_beftm_discount(&9_000);
    assert_eq!(f.strategy.beftm_discount(), 9_000);
}

#[test]
fn test_flag_defaults_and_toggles() {
    let f = setup_strategy_fixture();

    assert!(f.strategy.do_health_check());
    assert!(!f.strategy.realise_losses());

    f.strategy.set_do_health_check(&false);
    f.strategy.set_realise_losses(&true);
    assert!(!f.strategy.do_health_check());
    assert!(f.strategy.realise_losses());
}
