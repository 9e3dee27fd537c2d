//! Period management for the simulation
//!
//! The simulation operates in discrete monthly periods, numbered from 1.
//! A run is bounded by a period cap so that debts whose minimum payment never
//! outpaces interest cannot keep the loop alive forever.

use serde::{Deserialize, Serialize};

/// Default cap on simulated periods (30 years of months)
pub const DEFAULT_PERIOD_CAP: u32 = 360;

/// Number of periods in one year
pub const PERIODS_PER_YEAR: u32 = 12;

/// Counts simulated months up to a fixed cap
///
/// Period 0 means "nothing simulated yet". Each call to [`PeriodClock::advance`]
/// moves to the next period until the cap is reached.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::PeriodClock;
///
/// let mut clock = PeriodClock::new(360);
/// assert_eq!(clock.current_period(), 0);
///
/// assert_eq!(clock.advance(), Some(1));
/// assert_eq!(clock.current_period(), 1);
/// assert!(!clock.is_exhausted());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodClock {
    /// Last period entered (0 before the first period)
    current_period: u32,
    /// Highest period the clock may enter
    period_cap: u32,
}

impl PeriodClock {
    /// Create a new clock
    ///
    /// # Panics
    /// Panics if `period_cap` is zero
    pub fn new(period_cap: u32) -> Self {
        assert!(period_cap > 0, "period_cap must be positive");
        Self {
            current_period: 0,
            period_cap,
        }
    }

    /// Enter the next period
    ///
    /// Returns the new period number, or `None` once the cap has been reached.
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::PeriodClock;
    ///
    /// let mut clock = PeriodClock::new(2);
    /// assert_eq!(clock.advance(), Some(1));
    /// assert_eq!(clock.advance(), Some(2));
    /// assert_eq!(clock.advance(), None);
    /// assert_eq!(clock.current_period(), 2);
    /// ```
    pub fn advance(&mut self) -> Option<u32> {
        if self.is_exhausted() {
            return None;
        }
        self.current_period += 1;
        Some(self.current_period)
    }

    /// Get the current period (0 before the first period)
    pub fn current_period(&self) -> u32 {
        self.current_period
    }

    /// Get the configured cap
    pub fn period_cap(&self) -> u32 {
        self.period_cap
    }

    /// Check whether the cap has been reached
    pub fn is_exhausted(&self) -> bool {
        self.current_period >= self.period_cap
    }

    /// Periods left before the cap
    pub fn remaining_periods(&self) -> u32 {
        self.period_cap - self.current_period
    }
}

impl Default for PeriodClock {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD_CAP)
    }
}
