//! Debt model
//!
//! Represents one outstanding debt as supplied by the caller.
//! Each debt has:
//! - Opaque identifier (unique within a run) and display name
//! - Current balance (exact decimal, non-negative)
//! - Nominal annual interest rate in percent
//! - Contractual minimum monthly payment (positive)
//!
//! Debts are never mutated by the engine. Simulations copy balances into
//! their own working state.

use crate::core::money::{self, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when caller input cannot be simulated
///
/// All of these are detected before any simulation work begins.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Debt {debt_id}: minimum payment must be positive, got {minimum_payment}")]
    NonPositiveMinimumPayment {
        debt_id: String,
        minimum_payment: Money,
    },

    #[error("Debt {debt_id}: balance must be non-negative, got {balance}")]
    NegativeBalance { debt_id: String, balance: Money },

    #[error("Debt {debt_id}: annual rate must be non-negative, got {annual_rate_percent}%")]
    NegativeRate {
        debt_id: String,
        annual_rate_percent: Decimal,
    },

    #[error("Extra payment must be non-negative, got {0}")]
    NegativeExtraPayment(Money),

    #[error("Duplicate debt id: {0}")]
    DuplicateId(String),
}

/// A debt to be paid off
///
/// Field names follow snake_case in JSON. The record names used by the
/// debt tracker front end (`currentBalance`, `interestRate`, `emiAmount`)
/// are accepted as aliases, and unrelated fields on those records are ignored.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::Debt;
/// use rust_decimal::Decimal;
///
/// let debt = Debt::new(
///     "Credit Card".to_string(),
///     Decimal::from(5000),
///     Decimal::from(36),
///     Decimal::from(250),
/// );
/// assert_eq!(debt.name(), "Credit Card");
/// assert!(debt.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Opaque identifier (UUID when generated)
    #[serde(default = "generate_id")]
    id: String,

    /// Display label, carried through unchanged
    #[serde(default)]
    name: String,

    /// Outstanding amount
    #[serde(alias = "currentBalance")]
    balance: Money,

    /// Nominal annual rate in percent (12.5 means 12.5% per year)
    #[serde(alias = "interestRate", alias = "annualRatePercent")]
    annual_rate_percent: Decimal,

    /// Contractual minimum monthly payment
    #[serde(alias = "emiAmount", alias = "minimumPayment")]
    minimum_payment: Money,
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Debt {
    /// Create a new debt with a generated identifier
    ///
    /// Values are not checked here; call [`Debt::validate`] or let the
    /// simulator reject them.
    pub fn new(
        name: String,
        balance: Money,
        annual_rate_percent: Decimal,
        minimum_payment: Money,
    ) -> Self {
        Self::with_id(
            generate_id(),
            name,
            balance,
            annual_rate_percent,
            minimum_payment,
        )
    }

    /// Create a debt with a caller-supplied identifier
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::Debt;
    /// use rust_decimal::Decimal;
    ///
    /// let debt = Debt::with_id(
    ///     "loan-1".to_string(),
    ///     "Car Loan".to_string(),
    ///     Decimal::from(12000),
    ///     Decimal::from(9),
    ///     Decimal::from(400),
    /// );
    /// assert_eq!(debt.id(), "loan-1");
    /// ```
    pub fn with_id(
        id: String,
        name: String,
        balance: Money,
        annual_rate_percent: Decimal,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id,
            name,
            balance,
            annual_rate_percent,
            minimum_payment,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn minimum_payment(&self) -> Money {
        self.minimum_payment
    }

    /// Check whether anything is still owed
    pub fn is_outstanding(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// Interest the current balance would accrue in one month
    ///
    /// Returns `None` on overflow.
    pub fn first_month_interest(&self) -> Option<Money> {
        money::monthly_interest(self.balance, self.annual_rate_percent)
    }

    /// Check whether the minimum payment fails to outpace interest
    ///
    /// A debt with a positive balance whose minimum payment is less than or
    /// equal to its monthly interest never shrinks on minimums alone.
    /// Overflowing interest counts as non-convergent.
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::Debt;
    /// use rust_decimal::Decimal;
    ///
    /// // 100000 at 36% accrues 3000 a month; 500 never catches up
    /// let debt = Debt::new(
    ///     "Payday".to_string(),
    ///     Decimal::from(100_000),
    ///     Decimal::from(36),
    ///     Decimal::from(500),
    /// );
    /// assert!(debt.is_non_convergent());
    /// ```
    pub fn is_non_convergent(&self) -> bool {
        if !self.is_outstanding() {
            return false;
        }
        match self.first_month_interest() {
            Some(interest) => self.minimum_payment <= interest,
            None => true,
        }
    }

    /// Validate this debt on its own
    pub fn validate(&self) -> Result<(), InputError> {
        if self.minimum_payment <= Decimal::ZERO {
            return Err(InputError::NonPositiveMinimumPayment {
                debt_id: self.id.clone(),
                minimum_payment: self.minimum_payment,
            });
        }
        if self.balance < Decimal::ZERO {
            return Err(InputError::NegativeBalance {
                debt_id: self.id.clone(),
                balance: self.balance,
            });
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(InputError::NegativeRate {
                debt_id: self.id.clone(),
                annual_rate_percent: self.annual_rate_percent,
            });
        }
        Ok(())
    }
}

/// Validate a full simulation input
///
/// Checks the extra payment, every debt, and id uniqueness, in that order.
pub fn validate_inputs(debts: &[Debt], extra_payment: Money) -> Result<(), InputError> {
    if extra_payment < Decimal::ZERO {
        return Err(InputError::NegativeExtraPayment(extra_payment));
    }

    let mut seen = HashSet::with_capacity(debts.len());
    for debt in debts {
        debt.validate()?;
        if !seen.insert(debt.id()) {
            return Err(InputError::DuplicateId(debt.id().to_string()));
        }
    }
    Ok(())
}
