//! Core primitives: simulated time and money

pub mod money;
pub mod time;

pub use money::Money;
pub use time::{PeriodClock, DEFAULT_PERIOD_CAP, PERIODS_PER_YEAR};
