//! Domain models for the debt payoff simulator

pub mod debt;
pub mod ledger;
pub mod portfolio;
pub mod state;

// Re-exports
pub use debt::{validate_inputs, Debt, InputError};
pub use ledger::{Ledger, LedgerEntry};
pub use portfolio::PortfolioSummary;
pub use state::{DebtSlot, SimulationState};
