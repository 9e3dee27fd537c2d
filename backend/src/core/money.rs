//! Monetary arithmetic
//!
//! All money values are exact decimals. Nothing in the engine rounds;
//! rounding and currency formatting belong to whoever displays the figures.

use rust_decimal::Decimal;

/// Monetary amount (exact decimal)
pub type Money = Decimal;

/// Months per year times percent scale: `rate / 12 / 100 == rate / 1200`
const MONTHLY_PERCENT_DIVISOR: u32 = 1200;

/// Interest accrued on `balance` over one month at a nominal annual rate
///
/// Computed as `balance * annual_rate_percent / 1200` so that only one
/// division (and therefore at most one truncation) happens per accrual.
///
/// Returns `None` on overflow.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::core::money::monthly_interest;
/// use rust_decimal::Decimal;
///
/// let interest = monthly_interest(Decimal::from(1200), Decimal::from(12)).unwrap();
/// assert_eq!(interest, Decimal::from(12));
/// ```
pub fn monthly_interest(balance: Money, annual_rate_percent: Decimal) -> Option<Money> {
    balance
        .checked_mul(annual_rate_percent)?
        .checked_div(Decimal::from(MONTHLY_PERCENT_DIVISOR))
}

/// Apply a payment to a balance, clamping at zero
///
/// `principal = payment - interest`; the new balance is
/// `max(0, balance - principal)`. When the payment does not cover the
/// interest the principal is negative and the balance grows.
///
/// Returns `None` on overflow.
pub fn apply_payment(balance: Money, payment: Money, interest: Money) -> Option<Money> {
    let principal = payment.checked_sub(interest)?;
    let remaining = balance.checked_sub(principal)?;
    Some(remaining.max(Decimal::ZERO))
}

/// Sum amounts, returning `None` on overflow
pub fn checked_sum<I>(amounts: I) -> Option<Money>
where
    I: IntoIterator<Item = Money>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

/// Absolute difference between two amounts
pub fn abs_diff(a: Money, b: Money) -> Money {
    (a - b).abs()
}
