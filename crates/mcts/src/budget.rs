use crate::config::Budget;
use std::time::{Duration, Instant};

/// Tracks how many search cycles a decision has run against its [`Budget`].
///
/// The deadline is polled between cycles only, so a decision can overrun it
/// by at most one cycle.
#[derive(Debug)]
pub struct BudgetTracker {
    budget: Budget,
    started: Instant,
    cycles: u32,
}

impl BudgetTracker {
    /// Start the clock.
    pub fn start(budget: Budget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            cycles: 0,
        }
    }

    /// Whether another cycle may start.
    pub fn should_continue(&self) -> bool {
        match self.budget {
            Budget::Immediate => false,
            Budget::Iterations(limit) => self.cycles < limit,
            // The first cycle always runs, even with a zero deadline.
            Budget::Deadline(limit) => self.cycles == 0 || self.started.elapsed() < limit,
        }
    }

    pub fn record_cycle(&mut self) {
        self.cycles += 1;
    }

    /// Cycles completed so far.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
