// src/simulation/metrics.rs

use crate::model::calendar::Regime;
use serde::Serialize;

/// Snapshot of one simulated day, taken before the scratch counters are cleared.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub regime: Regime,
    pub orders_generated: usize,
    pub orders_produced: usize,
    pub orders_lost: usize,
    /// Orders on the last machine that broke down today.
    pub failed_orders: usize,
    pub machine_failures: u64,
    pub profit_contribution: i64,
    pub cumulative_profit: i64,
}

/// End-of-run tallies handed to the reporting layer.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub orders_generated: u64,
    pub orders_lost: u64,
    /// The failed-orders scratch value as left after the final day, which is always zero.
    pub failed_orders: u64,
    pub total_profit: i64,
    pub machine_failures: u64,
    pub failures_per_day: f64,
}

/// Cumulative counters for the run plus the per-day scratch values.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    // Cumulative, never cleared during a run
    pub orders_generated: u64,
    pub orders_lost: u64,
    pub machine_failures: u64,
    pub total_profit: i64,

    // Scratch, cleared when folded into profit
    pub produced_today: u64,
    pub failed_today: u64,
}

impl RunMetrics {
    pub fn record_generated(&mut self, count: usize) {
        self.orders_generated += count as u64;
    }

    pub fn record_lost(&mut self, count: usize) {
        self.orders_lost += count as u64;
    }

    /// A machine broke down holding `accepted` orders.
    ///
    /// Later failures on the same day replace the scratch value instead of
    /// adding to it.
    pub fn record_machine_failure(&mut self, accepted: usize) {
        self.failed_today = accepted as u64;
        self.machine_failures += 1;
    }

    pub fn record_produced(&mut self, count: usize) {
        self.produced_today += count as u64;
    }

    /// Folds the day into total profit and clears the scratch counters.
    ///
    /// The subtrahend is the lost count for the whole run so far, not just
    /// today's losses.
    pub fn close_day(&mut self, profit_per_order: i64) -> i64 {
        let net_orders =
            self.produced_today as i64 - self.orders_lost as i64 - self.failed_today as i64;
        let contribution = net_orders * profit_per_order;
        self.total_profit += contribution;
        self.produced_today = 0;
        self.failed_today = 0;
        contribution
    }

    pub fn report(&self, horizon: usize) -> SimulationReport {
        SimulationReport {
            orders_generated: self.orders_generated,
            orders_lost: self.orders_lost,
            failed_orders: self.failed_today,
            total_profit: self.total_profit,
            machine_failures: self.machine_failures,
            failures_per_day: self.machine_failures as f64 / horizon as f64,
        }
    }
}
