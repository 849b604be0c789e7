//! Full emergency exit: harvest profits, shut the vault down, unwind the
//! strategy over two harvests, and confirm depositors leave whole.

use crate::tests::testutils::*;
use crate::{AMOUNT, ONE_DAY, SCALAR_7};

#[test]
fn test_emergency_shutdown_recovers_all_funds() {
    let f = setup_scenario();
    let starting_whale = f.token.balance(&f.actors.whale);

    f.vault.deposit(&f.actors.whale, &AMOUNT);
    sleep(&f.env, 1);
    f.harvest_unchecked();
    sleep(&f.env, 1);

    // a day of earnings, realized by a second harvest
    sleep(&f.env, ONE_DAY);
    mine(&f.env, 1);
    f.harvest_unchecked();

    sleep(&f.env, ONE_DAY);

    // exit everything; losses (if any) are taken rather than held
    f.vault.set_emergency_shutdown(&true);
    f.strategy.set_realise_losses(&true);
    sleep(&f.env, 1);
    f.harvest_unchecked();
    sleep(&f.env, 1);

    // the pool releases its redemption holdback one interaction later
    f.harvest_unchecked();
    sleep(&f.env, 1);

    assert!(f.strategy.estimated_total_assets() <= SCALAR_7);
    assert_eq!(f.token.balance(&f.strategy.address), 0);

    // share price settles before the exit
    sleep(&f.env, ONE_DAY);
    mine(&f.env, 1);

    f.vault.withdraw(&f.actors.whale, &None);
    assert!(f.token.balance(&f.actors.whale) >= starting_whale - 5);
}
