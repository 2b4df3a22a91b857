// src/io/reporting.rs

use crate::io::demand::VisitSample;
use crate::simulation::metrics::{DayRecord, SimulationReport};
use log::info;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// Summary row written to the results file.
#[derive(Debug, Serialize)]
struct SummaryRow {
    orders_generated: u64,
    orders_lost: u64,
    total_profit: i64,
    machine_failures: u64,
    failures_per_day: f64,
}

impl From<&SimulationReport> for SummaryRow {
    fn from(report: &SimulationReport) -> Self {
        Self {
            orders_generated: report.orders_generated,
            orders_lost: report.orders_lost,
            total_profit: report.total_profit,
            machine_failures: report.machine_failures,
            failures_per_day: report.failures_per_day,
        }
    }
}

/// Prints the final metrics of the run.
pub fn print_results(report: &SimulationReport) {
    println!("\n--- Simulation Results ---");
    println!("Orders generated: {}", report.orders_generated);
    println!("Orders lost: {}", report.orders_lost);
    println!("Orders on failed machines: {}", report.failed_orders);
    println!("Total annual profit: ${}", report.total_profit);
    println!("Machine failures: {}", report.machine_failures);
    println!(
        "Production failure rate: {:.2} failures/day",
        report.failures_per_day
    );
}

/// Writes the end-of-run tallies as a single-row CSV.
pub fn write_summary<P: AsRef<Path>>(
    file_path: P,
    report: &SimulationReport,
) -> Result<(), Box<dyn Error>> {
    write_rows(file_path, &[SummaryRow::from(report)])
}

/// Writes the per-day history, one row per simulated day.
pub fn write_daily_log<P: AsRef<Path>>(
    file_path: P,
    data: &[DayRecord],
) -> Result<(), Box<dyn Error>> {
    write_rows(file_path, data)
}

/// Writes the redrawn daily visit series used for the visits chart.
pub fn write_visit_series<P: AsRef<Path>>(
    file_path: P,
    data: &[VisitSample],
) -> Result<(), Box<dyn Error>> {
    write_rows(file_path, data)
}

fn write_rows<P: AsRef<Path>, T: Serialize>(
    file_path: P,
    data: &[T],
) -> Result<(), Box<dyn Error>> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!("Exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}
