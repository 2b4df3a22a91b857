mod error;
mod io;
mod model;
mod simulation;
mod strategy;

use crate::io::reporting;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::FactorySimulation;
use crate::strategy::implementations::FirstFitPolicy;

const SUMMARY_FILE: &str = "simulation_results.csv";
const DAILY_LOG_FILE: &str = "daily_log.csv";
const VISITS_FILE: &str = "daily_visits.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    println!("=== Order Fulfillment Simulation ===");

    // 1. SETUP CONFIGURATION
    let config = SimulationConfig::default();
    println!(
        "Horizon: {} days | Machines: {} | Capacity: {} orders/day",
        config.horizon, config.machine_count, config.per_machine_capacity
    );

    // 2. RUN SIMULATION
    // Orders go to the first machine with room, in fixed id order
    let mut sim = FactorySimulation::new(config)?.with_policy(Box::new(FirstFitPolicy::new()));
    let report = sim.run();

    // 3. PRINT RESULTS
    reporting::print_results(&report);

    // 4. EXPORT RESULTS
    reporting::write_summary(SUMMARY_FILE, &report)?;
    reporting::write_daily_log(DAILY_LOG_FILE, &sim.history)?;

    // The chart series is redrawn, not replayed from the run
    let visits = sim.visit_series();
    reporting::write_visit_series(VISITS_FILE, &visits)?;

    println!("\nSimulation Complete.");
    Ok(())
}
