// src/simulation/engine.rs

use crate::error::SimulationError;
use crate::io::demand::{DemandGenerator, VisitSample};
use crate::model::calendar::Regime;
use crate::model::machine::MachinePool;
use crate::model::order::{Order, OrderState};
use crate::simulation::config::SimulationConfig;
use crate::simulation::metrics::{DayRecord, RunMetrics, SimulationReport};
use crate::strategy::implementations::FirstFitPolicy;
use crate::strategy::traits::AssignmentPolicy;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How often (in days) a progress line is logged.
const PROGRESS_INTERVAL: usize = 30;

pub struct FactorySimulation<R: Rng = StdRng> {
    config: SimulationConfig,

    // The Fleet
    pub pool: MachinePool,
    policy: Box<dyn AssignmentPolicy>,

    // Sources of randomness
    demand: DemandGenerator,
    rng: R,

    // Outputs
    pub metrics: RunMetrics,
    pub current_day: usize,
    pub history: Vec<DayRecord>,
}

impl FactorySimulation<StdRng> {
    /// Builds a simulation seeded from `config.seed`, or from the OS when unset.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> FactorySimulation<R> {
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self, SimulationError> {
        config.validate()?;

        let pool = MachinePool::new(config.machine_count, config.per_machine_capacity);
        let demand = DemandGenerator::new()?;

        Ok(Self {
            history: Vec::new(),
            config,
            pool,
            policy: Box::new(FirstFitPolicy::new()),
            demand,
            rng,
            metrics: RunMetrics::default(),
            current_day: 0,
        })
    }

    /// Swaps the assignment policy. Must be called before the first day.
    pub fn with_policy(mut self, policy: Box<dyn AssignmentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Runs every remaining day of the horizon and returns the final tallies.
    pub fn run(&mut self) -> SimulationReport {
        info!(
            "Simulating {} days with {} machines of capacity {}",
            self.config.horizon,
            self.pool.machines().len(),
            self.config.per_machine_capacity
        );

        while self.current_day < self.config.horizon {
            self.step();
        }

        let report = self.report();
        debug!(
            "Pool lifetime failures: {}, tallied: {}",
            self.pool.total_failures(),
            report.machine_failures
        );
        info!(
            "Run complete: {} orders, {} lost, {} machine failures",
            report.orders_generated, report.orders_lost, report.machine_failures
        );
        report
    }

    /// Draws today's demand and simulates the day.
    pub fn step(&mut self) -> DayRecord {
        let day = self.current_day;
        let order_count = self.demand.generate_orders(day, &mut self.rng);
        let record = self.simulate_day(day, order_count);

        if (day + 1) % PROGRESS_INTERVAL == 0 {
            info!(
                "Day {}: {} orders lost so far, profit ${}",
                day + 1,
                self.metrics.orders_lost,
                self.metrics.total_profit
            );
        }
        self.current_day += 1;
        record
    }

    /// Simulates one day for a batch of `order_count` orders.
    ///
    /// Phases: reset the fleet, assign, roll failures, tally.
    pub fn simulate_day(&mut self, day: usize, order_count: usize) -> DayRecord {
        self.metrics.record_generated(order_count);

        // =================================================================
        // PHASE 1: MORNING (Repair)
        // =================================================================
        self.pool.reset_all();

        // =================================================================
        // PHASE 2: DAY (Assignment)
        // =================================================================
        let mut orders = Order::batch(order_count);
        let lost = self.policy.assign(&mut orders, &mut self.pool);
        self.metrics.record_lost(lost);

        // =================================================================
        // PHASE 3: EVENING (Breakdowns)
        // =================================================================
        let mut failures_today = 0;
        for machine in self.pool.machines_mut() {
            if machine.roll_failure(&mut self.rng, self.config.failure_probability) {
                trace!(
                    "Day {}: machine {} failed holding {} orders",
                    day,
                    machine.id,
                    machine.accepted_count()
                );
                self.metrics.record_machine_failure(machine.accepted_count());
                failures_today += 1;
            }
        }

        // =================================================================
        // PHASE 4: TALLY
        // =================================================================
        let produced = orders
            .iter()
            .filter(|order| order.state == OrderState::Produced)
            .count();
        self.metrics.record_produced(produced);
        let failed_orders = self.metrics.failed_today as usize;
        let profit_contribution = self.metrics.close_day(self.config.profit_per_order);

        let record = DayRecord {
            day,
            regime: Regime::for_day(day),
            orders_generated: order_count,
            orders_produced: produced,
            orders_lost: lost,
            failed_orders,
            machine_failures: failures_today,
            profit_contribution,
            cumulative_profit: self.metrics.total_profit,
        };
        debug!("{:?}", record);
        self.history.push(record.clone());
        record
    }

    pub fn report(&self) -> SimulationReport {
        self.metrics.report(self.config.horizon)
    }

    /// Fresh visit draws for every day of the horizon, for the chart.
    pub fn visit_series(&mut self) -> Vec<VisitSample> {
        self.demand.visit_series(self.config.horizon, &mut self.rng)
    }
}
