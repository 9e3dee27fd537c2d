//! Simulation State
//!
//! Working balances for a single simulation run.
//!
//! # Critical Invariants
//!
//! 1. **No aliasing**: balances are copied from the input debts; the caller's
//!    records are never touched
//! 2. **Fixed order**: slots are stored in priority order, decided once when
//!    the state is built
//! 3. **Non-negative**: a slot's balance never drops below zero

use crate::core::money::Money;
use crate::models::debt::Debt;
use rust_decimal::Decimal;

/// One debt's working data inside a run
#[derive(Debug, Clone)]
pub struct DebtSlot {
    pub debt_id: String,
    pub name: String,
    pub starting_balance: Money,
    pub balance: Money,
    pub annual_rate_percent: Decimal,
    pub minimum_payment: Money,
    /// Interest charged to this debt so far
    pub interest_paid: Money,
    /// Period in which the balance reached zero
    pub paid_off_in: Option<u32>,
}

/// Mutable working copy of every debt's balance, in priority order
///
/// # Example
///
/// ```rust
/// use debt_payoff_core_rs::{Debt, SimulationState};
/// use rust_decimal::Decimal;
///
/// let debts = vec![
///     Debt::with_id("a".into(), "A".into(), Decimal::from(500), Decimal::from(10), Decimal::from(50)),
///     Debt::with_id("b".into(), "B".into(), Decimal::from(100), Decimal::from(20), Decimal::from(25)),
/// ];
///
/// // Process "b" first
/// let state = SimulationState::new(&debts, &[1, 0]);
/// assert_eq!(state.num_debts(), 2);
/// assert_eq!(state.slots()[0].debt_id, "b");
/// assert_eq!(state.total_balance(), Ok(Decimal::from(600)));
/// assert_eq!(debts[0].balance(), Decimal::from(500));
/// ```
#[derive(Debug, Clone)]
pub struct SimulationState {
    slots: Vec<DebtSlot>,
}

impl SimulationState {
    /// Build working state from input debts and a priority order
    ///
    /// `order` lists indices into `debts`, highest priority first.
    ///
    /// # Panics
    /// Panics if an index in `order` is out of bounds
    pub fn new(debts: &[Debt], order: &[usize]) -> Self {
        let slots = order
            .iter()
            .map(|&index| {
                let debt = &debts[index];
                DebtSlot {
                    debt_id: debt.id().to_string(),
                    name: debt.name().to_string(),
                    starting_balance: debt.balance(),
                    balance: debt.balance(),
                    annual_rate_percent: debt.annual_rate_percent(),
                    minimum_payment: debt.minimum_payment(),
                    interest_paid: Decimal::ZERO,
                    paid_off_in: None,
                }
            })
            .collect();

        Self { slots }
    }

    pub fn num_debts(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[DebtSlot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [DebtSlot] {
        &mut self.slots
    }

    pub fn slot_mut(&mut self, position: usize) -> Option<&mut DebtSlot> {
        self.slots.get_mut(position)
    }

    /// Position of the highest-priority debt that still owes money
    pub fn first_outstanding(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.balance > Decimal::ZERO)
    }

    /// Check whether every working balance is zero
    pub fn all_paid(&self) -> bool {
        self.first_outstanding().is_none()
    }

    /// Sum of all working balances
    ///
    /// On overflow, returns the id of the debt whose balance pushed the sum
    /// past the decimal range.
    pub fn total_balance(&self) -> Result<Money, &str> {
        self.slots.iter().try_fold(Decimal::ZERO, |total, slot| {
            total
                .checked_add(slot.balance)
                .ok_or(slot.debt_id.as_str())
        })
    }

    /// Consume the state, returning its slots
    pub fn into_slots(self) -> Vec<DebtSlot> {
        self.slots
    }
}
