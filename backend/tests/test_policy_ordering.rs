//! Tests for payoff ordering: fixed priority, tie-breaking, single-debt equivalence

use debt_payoff_core_rs::policy::{HighestRateFirst, PayoffOrdering, SmallestBalanceFirst};
use debt_payoff_core_rs::{simulate, Debt, Policy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn debt(id: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
    Debt::with_id(id.to_string(), id.to_string(), balance, rate, minimum)
}

#[test]
fn test_policy_resolves_to_its_ordering() {
    assert_eq!(
        Policy::SmallestBalanceFirst.ordering().name(),
        SmallestBalanceFirst.name()
    );
    assert_eq!(Policy::HighestRateFirst.ordering().name(), HighestRateFirst.name());
    assert_eq!(Policy::SmallestBalanceFirst.method_name(), "snowball");
    assert_eq!(Policy::HighestRateFirst.method_name(), "avalanche");
}

#[test]
fn test_priority_is_fixed_at_start() {
    // After period 1 "b" (500) is smaller than "a" (890), yet "a" keeps the extra
    let debts = vec![
        debt("a", dec!(1000), dec!(0), dec!(10)),
        debt("b", dec!(2000), dec!(0), dec!(1500)),
    ];
    let result = simulate(&debts, dec!(100), Policy::SmallestBalanceFirst).unwrap();

    let period_one = result.ledger.entries_in_period(1);
    assert_eq!(period_one[0].debt_id, "a");
    assert_eq!(period_one[0].balance_after, dec!(890));
    assert_eq!(period_one[1].balance_after, dec!(500));

    let period_two = result.ledger.entries_in_period(2);
    assert_eq!(period_two[0].debt_id, "a");
    assert_eq!(period_two[0].payment_applied, dec!(110));
    assert_eq!(period_two[1].debt_id, "b");
    assert_eq!(period_two[1].payment_applied, dec!(1500));
}

#[test]
fn test_payoff_schedule_follows_priority() {
    let debts = vec![
        debt("mid", dec!(2000), dec!(15), dec!(100)),
        debt("big", dec!(8000), dec!(6), dec!(200)),
        debt("small", dec!(400), dec!(30), dec!(40)),
    ];

    let snowball = simulate(&debts, dec!(50), Policy::SmallestBalanceFirst).unwrap();
    let ranks: Vec<(&str, usize)> = snowball
        .payoff_schedule
        .iter()
        .map(|p| (p.debt_id.as_str(), p.rank))
        .collect();
    assert_eq!(ranks, vec![("small", 1), ("mid", 2), ("big", 3)]);

    let avalanche = simulate(&debts, dec!(50), Policy::HighestRateFirst).unwrap();
    let order: Vec<&str> = avalanche
        .payoff_schedule
        .iter()
        .map(|p| p.debt_id.as_str())
        .collect();
    assert_eq!(order, vec!["small", "mid", "big"]);
    assert_eq!(avalanche.payoff_schedule[0].starting_balance, dec!(400));
}

#[test]
fn test_equal_rates_keep_input_order_for_avalanche() {
    let debts = vec![
        debt("first", dec!(5000), dec!(18), dec!(150)),
        debt("second", dec!(100), dec!(18), dec!(20)),
    ];
    let result = simulate(&debts, dec!(100), Policy::HighestRateFirst).unwrap();
    let period_one = result.ledger.entries_in_period(1);
    assert_eq!(period_one[0].debt_id, "first");
    assert_eq!(period_one[0].payment_applied, dec!(250));
}

#[test]
fn test_equal_balances_keep_input_order_for_snowball() {
    let debts = vec![
        debt("low", dec!(1000), dec!(6), dec!(50)),
        debt("high", dec!(1000), dec!(30), dec!(50)),
    ];
    let result = simulate(&debts, dec!(100), Policy::SmallestBalanceFirst).unwrap();
    assert_eq!(result.payoff_schedule[0].debt_id, "low");
    assert_eq!(result.ledger.entries_in_period(1)[0].payment_applied, dec!(150));
}

#[test]
fn test_single_debt_policies_are_equivalent() {
    let debts = vec![debt("only", dec!(7500), dec!(21), dec!(180))];

    for extra in [dec!(0), dec!(25), dec!(333.33), dec!(10000)] {
        let snowball = simulate(&debts, extra, Policy::SmallestBalanceFirst).unwrap();
        let avalanche = simulate(&debts, extra, Policy::HighestRateFirst).unwrap();

        assert_eq!(snowball.months, avalanche.months, "extra {}", extra);
        assert_eq!(snowball.total_interest_paid, avalanche.total_interest_paid);
        assert_eq!(snowball.ledger, avalanche.ledger);
        assert_eq!(snowball.payoff_schedule, avalanche.payoff_schedule);
    }
}
