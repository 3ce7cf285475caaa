//! Time budget bookkeeping for a single planning call.

/// Remaining travel time of a journey being composed.
///
/// The budget only ever shrinks, and only by amounts already checked with
/// [`JourneyBudget::can_afford`], so it cannot go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyBudget {
    remaining_secs: u32,
}

impl JourneyBudget {
    /// Start a budget with the full requested duration.
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining_secs: total_secs,
        }
    }

    /// Seconds still available.
    pub fn remaining(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether nothing is left to spend.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Whether a detour via a stop still leaves time to reach the end.
    ///
    /// `to_stop` is the travel time from the current position to the stop,
    /// `stop_to_end` the travel time from the stop to the journey's end.
    pub fn can_afford(&self, to_stop: u32, stop_to_end: u32) -> bool {
        u64::from(to_stop) + u64::from(stop_to_end) <= u64::from(self.remaining_secs)
    }

    /// Spend travel time to reach an accepted stop.
    ///
    /// Callers check [`can_afford`](Self::can_afford) first; overspending
    /// saturates at zero.
    pub fn spend(&mut self, secs: u32) {
        debug_assert!(secs <= self.remaining_secs, "spent more than the budget");
        self.remaining_secs = self.remaining_secs.saturating_sub(secs);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Spending an affordable outbound leg never underflows
        #[test]
        fn affordable_spend_stays_non_negative(
            total in 0u32..100_000,
            to_stop in 0u32..100_000,
            to_end in 0u32..100_000,
        ) {
            let mut budget = JourneyBudget::new(total);
            if budget.can_afford(to_stop, to_end) {
                budget.spend(to_stop);
                prop_assert_eq!(budget.remaining(), total - to_stop);
                prop_assert!(budget.remaining() >= to_end);
            }
        }

        /// can_afford matches the plain arithmetic rule
        #[test]
        fn can_afford_matches_sum(total: u32, to_stop: u32, to_end: u32) {
            let expected = u64::from(to_stop) + u64::from(to_end) <= u64::from(total);
            prop_assert_eq!(JourneyBudget::new(total).can_afford(to_stop, to_end), expected);
        }
    }
}
