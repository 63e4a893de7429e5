//! Billing Period Toggle
//!
//! View-local state holding the period the page currently prices in.
//! It always holds exactly one of the two periods.

use serde::{Deserialize, Serialize};

use crate::model::BillingPeriod;

/// Currently selected billing period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePeriod {
    period: BillingPeriod,
}

impl ActivePeriod {
    /// Fresh state for a page view, starts on Monthly
    pub fn initialize() -> Self {
        Self {
            period: BillingPeriod::Monthly,
        }
    }

    /// Select a period. The input domain is closed so this cannot fail.
    pub fn set_period(&mut self, period: BillingPeriod) {
        if self.period != period {
            tracing::debug!(from = %self.period, to = %period, "billing period changed");
        }
        self.period = period;
    }

    /// Flip to the other period
    pub fn toggle(&mut self) {
        self.set_period(self.period.opposite());
    }

    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    pub fn is(&self, period: BillingPeriod) -> bool {
        self.period == period
    }
}

impl From<BillingPeriod> for ActivePeriod {
    fn from(period: BillingPeriod) -> Self {
        Self { period }
    }
}
