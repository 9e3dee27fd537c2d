//! Integration tests for the amortization loop
//!
//! Tests cover:
//! - Empty input
//! - Hand-computed single-debt amortization
//! - Extra payment routing
//! - Idempotence and input isolation
//! - Input validation

use debt_payoff_core_rs::{
    simulate, Debt, InputError, LedgerEntry, PayoffOutcome, Policy, SimulationError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn debt(id: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
    Debt::with_id(id.to_string(), id.to_uppercase(), balance, rate, minimum)
}

/// Three debts whose snowball and avalanche targets differ
fn three_debts() -> Vec<Debt> {
    vec![
        debt("a", dec!(3000), dec!(24), dec!(90)),
        debt("b", dec!(500), dec!(12), dec!(25)),
        debt("c", dec!(1200), dec!(18), dec!(40)),
    ]
}

#[test]
fn test_empty_input_both_policies() {
    for policy in Policy::ALL {
        let result = simulate(&[], dec!(500), policy).unwrap();
        assert_eq!(result.months, 0);
        assert_eq!(result.total_interest_paid, Decimal::ZERO);
        assert!(result.ledger.is_empty());
        assert_eq!(result.outcome, PayoffOutcome::PaidOff);
    }
}

#[test]
fn test_single_debt_hand_computed() {
    // 1200 at 12% a year = 1% a month, 200 a month
    let debts = vec![debt("loan", dec!(1200), dec!(12), dec!(200))];
    let result = simulate(&debts, dec!(0), Policy::SmallestBalanceFirst).unwrap();

    assert_eq!(result.months, 7);
    assert!(result.is_paid_off());
    assert_eq!(result.total_interest_paid, dec!(43.855380388212));

    let expected = [
        (dec!(12), dec!(1012)),
        (dec!(10.12), dec!(822.12)),
        (dec!(8.2212), dec!(630.3412)),
        (dec!(6.303412), dec!(436.644612)),
        (dec!(4.36644612), dec!(241.01105812)),
        (dec!(2.4101105812), dec!(43.4211687012)),
        (dec!(0.434211687012), dec!(0)),
    ];
    assert_eq!(result.ledger.len(), expected.len());
    for (i, (entry, (interest, balance))) in
        result.ledger.entries().iter().zip(expected.iter()).enumerate()
    {
        assert_eq!(entry.period, i as u32 + 1);
        assert_eq!(entry.debt_id, "loan");
        assert_eq!(entry.payment_applied, dec!(200));
        assert_eq!(entry.interest_charged, *interest, "interest in period {}", i + 1);
        assert_eq!(entry.balance_after, *balance, "balance in period {}", i + 1);
    }

    let payoff = result.payoff_for("loan").unwrap();
    assert_eq!(payoff.payoff_period, Some(7));
    assert_eq!(payoff.interest_paid, result.total_interest_paid);
    assert_eq!(payoff.ending_balance, Decimal::ZERO);
}

#[test]
fn test_total_interest_matches_ledger() {
    let result = simulate(&three_debts(), dec!(150), Policy::HighestRateFirst).unwrap();
    let from_ledger: Decimal = result
        .ledger
        .entries()
        .iter()
        .map(|e| e.interest_charged)
        .sum();
    assert_eq!(result.total_interest_paid, from_ledger);

    // Summed in a different order, so allow for last-digit rounding
    let from_schedule: Decimal = result.payoff_schedule.iter().map(|p| p.interest_paid).sum();
    assert!((result.total_interest_paid - from_schedule).abs() < dec!(0.000000001));
}

#[test]
fn test_extra_payment_goes_to_top_priority_snowball() {
    let result = simulate(&three_debts(), dec!(150), Policy::SmallestBalanceFirst).unwrap();

    let first_period: Vec<&LedgerEntry> = result.ledger.entries_in_period(1);
    let ids: Vec<&str> = first_period.iter().map(|e| e.debt_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);

    // Only "b" (smallest balance) receives minimum + extra
    assert_eq!(first_period[0].payment_applied, dec!(175));
    assert_eq!(first_period[1].payment_applied, dec!(40));
    assert_eq!(first_period[2].payment_applied, dec!(90));

    assert_eq!(first_period[0].balance_after, dec!(330));
    assert_eq!(first_period[1].balance_after, dec!(1178));
    assert_eq!(first_period[2].balance_after, dec!(2970));
}

#[test]
fn test_extra_payment_goes_to_top_priority_avalanche() {
    let result = simulate(&three_debts(), dec!(150), Policy::HighestRateFirst).unwrap();

    let first_period = result.ledger.entries_in_period(1);
    let ids: Vec<&str> = first_period.iter().map(|e| e.debt_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "b"]);

    // Only "a" (highest rate) receives minimum + extra
    assert_eq!(first_period[0].payment_applied, dec!(240));
    assert_eq!(first_period[0].balance_after, dec!(2820));
    assert_eq!(first_period[1].payment_applied, dec!(40));
    assert_eq!(first_period[2].payment_applied, dec!(25));
    assert_eq!(first_period[2].balance_after, dec!(480));
}

#[test]
fn test_extra_payment_is_never_split() {
    // "x" needs only 100 but receives 130; the surplus does not spill to "y"
    let debts = vec![
        debt("x", dec!(100), dec!(0), dec!(50)),
        debt("y", dec!(1000), dec!(0), dec!(50)),
    ];
    let result = simulate(&debts, dec!(80), Policy::SmallestBalanceFirst).unwrap();

    let period_one = result.ledger.entries_in_period(1);
    assert_eq!(period_one[0].payment_applied, dec!(130));
    assert_eq!(period_one[0].balance_after, dec!(0));
    assert_eq!(period_one[1].payment_applied, dec!(50));
    assert_eq!(period_one[1].balance_after, dec!(950));

    // Next period the extra moves to "y"
    let period_two = result.ledger.entries_in_period(2);
    assert_eq!(period_two.len(), 1);
    assert_eq!(period_two[0].debt_id, "y");
    assert_eq!(period_two[0].payment_applied, dec!(130));
    assert_eq!(period_two[0].balance_after, dec!(820));
}

#[test]
fn test_paid_off_debts_are_skipped() {
    let debts = vec![
        debt("short", dec!(100), dec!(0), dec!(100)),
        debt("long", dec!(300), dec!(0), dec!(100)),
    ];
    let result = simulate(&debts, dec!(0), Policy::SmallestBalanceFirst).unwrap();

    assert_eq!(result.months, 3);
    assert_eq!(result.ledger.entries_for_debt("short").len(), 1);
    assert_eq!(result.ledger.entries_for_debt("long").len(), 3);
    assert_eq!(result.payoff_for("short").unwrap().payoff_period, Some(1));
    assert_eq!(result.payoff_for("long").unwrap().payoff_period, Some(3));
}

#[test]
fn test_ledger_ordered_by_period_then_priority() {
    let result = simulate(&three_debts(), dec!(150), Policy::HighestRateFirst).unwrap();
    let rank: std::collections::HashMap<&str, usize> = result
        .payoff_schedule
        .iter()
        .map(|p| (p.debt_id.as_str(), p.rank))
        .collect();

    for pair in result.ledger.entries().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(
            prev.period < next.period
                || (prev.period == next.period
                    && rank[prev.debt_id.as_str()] < rank[next.debt_id.as_str()])
        );
    }
    assert_eq!(result.ledger.last_period(), result.months);
}

#[test]
fn test_simulate_is_idempotent_and_leaves_input_untouched() {
    let debts = three_debts();
    let snapshot = debts.clone();

    let first = simulate(&debts, dec!(150), Policy::SmallestBalanceFirst).unwrap();
    assert_eq!(debts, snapshot);

    let second = simulate(&debts, dec!(150), Policy::SmallestBalanceFirst).unwrap();
    assert_eq!(debts, snapshot);
    assert_eq!(first, second);

    // A different policy in between does not disturb later runs
    simulate(&debts, dec!(150), Policy::HighestRateFirst).unwrap();
    let third = simulate(&debts, dec!(150), Policy::SmallestBalanceFirst).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_balances_never_increase_when_minimums_cover_interest() {
    let result = simulate(&three_debts(), dec!(0), Policy::SmallestBalanceFirst).unwrap();
    assert!(result.non_convergent_debts.is_empty());
    for id in ["a", "b", "c"] {
        let balances: Vec<Decimal> = result
            .ledger
            .entries_for_debt(id)
            .iter()
            .map(|e| e.balance_after)
            .collect();
        assert!(balances.windows(2).all(|w| w[1] <= w[0]), "debt {} grew", id);
    }
}

#[test]
fn test_more_extra_never_takes_longer() {
    let debts = three_debts();
    let base = simulate(&debts, dec!(0), Policy::HighestRateFirst).unwrap();
    let boosted = simulate(&debts, dec!(250), Policy::HighestRateFirst).unwrap();
    assert!(boosted.months <= base.months);
    assert!(boosted.total_interest_paid < base.total_interest_paid);
}

#[test]
fn test_invalid_inputs_rejected_before_simulating() {
    let cases = vec![
        (vec![debt("a", dec!(100), dec!(5), dec!(0))], dec!(0)),
        (vec![debt("a", dec!(-100), dec!(5), dec!(10))], dec!(0)),
        (vec![debt("a", dec!(100), dec!(-5), dec!(10))], dec!(0)),
        (vec![debt("a", dec!(100), dec!(5), dec!(10))], dec!(-1)),
        (
            vec![
                debt("a", dec!(100), dec!(5), dec!(10)),
                debt("a", dec!(50), dec!(5), dec!(10)),
            ],
            dec!(0),
        ),
    ];

    for (debts, extra) in cases {
        let err = simulate(&debts, extra, Policy::SmallestBalanceFirst).unwrap_err();
        assert!(
            matches!(err, SimulationError::InvalidInput(_)),
            "unexpected error {:?}",
            err
        );
    }
}

#[test]
fn test_invalid_input_error_message() {
    let debts = vec![debt("a", dec!(100), dec!(5), dec!(10))];
    let err = simulate(&debts, dec!(-20), Policy::HighestRateFirst).unwrap_err();
    assert_eq!(err, SimulationError::InvalidInput(InputError::NegativeExtraPayment(dec!(-20))));
    assert_eq!(
        err.to_string(),
        "Invalid input: Extra payment must be non-negative, got -20"
    );
}
