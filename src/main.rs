use ompreng_sim::analysis::{histogram, StageSummary, DEFAULT_BINS};
use ompreng_sim::random::{RandomSource, RngSource};
use ompreng_sim::simulation::{ConfigBounds, Simulation, SimulationConfig};
use std::env;
use std::process::ExitCode;
use tracing::{error, warn};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Meal Tray Distribution: Monte Carlo Estimate ===");

    // 1. SETUP CONFIGURATION
    // Form defaults, clamped to the same ranges the input form offers.
    let config = ConfigBounds::form().clamp(&SimulationConfig::default());
    println!(
        "Tables: {}, trays per table: {}, total trays: {}",
        config.table_count,
        config.units_per_table,
        config.total_units()
    );
    println!(
        "Staff - side dish: {}, transport: {}, rice: {}",
        config.staff_side_dish, config.staff_transport, config.staff_rice
    );

    // 2. RANDOMNESS
    // OMPRENG_SEED makes the run reproducible.
    let mut rng: Box<dyn RandomSource> = match env::var("OMPRENG_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(seed) => Box::new(RngSource::seeded(seed)),
            Err(e) => {
                error!(value = %raw, "OMPRENG_SEED is not a u64: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => match RngSource::from_os_entropy() {
            Ok(source) => Box::new(source),
            Err(e) => {
                error!("Could not seed the generator: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    // 3. RUN SIMULATION
    println!("Running {} trials...", config.trial_count);
    let mut next_report = 0.1;
    let result = Simulation::new(config)
        .with_progress(|fraction| {
            if fraction >= next_report {
                println!("  {:>3.0}%", fraction * 100.0);
                next_report += 0.1;
            }
        })
        .run(&mut rng);

    let batch = match result {
        Ok(batch) => batch,
        Err(e) => {
            error!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(summary) = StageSummary::from_batch(&batch) else {
        warn!("No trials completed");
        return ExitCode::FAILURE;
    };

    // 4. PRINT RESULTS
    println!("\n=== Results ===");
    println!("Mean (seconds):       {:.0}", summary.mean_seconds);
    println!("Mean (minutes):       {:.2}", summary.mean_minutes());
    println!("Estimated finish:     {}", summary.completion_clock().short_label());

    println!("\n=== Stage Breakdown ===");
    for row in summary.breakdown() {
        println!(
            "{:<10} {:>8.0} s  {:>5.1}%",
            row.stage.label(),
            row.mean_seconds,
            row.share * 100.0
        );
    }
    println!("Bottleneck: {}", summary.bottleneck);

    println!("\n=== Total Time Distribution ===");
    let bins = histogram(&batch.total_times(), DEFAULT_BINS);
    let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bin in &bins {
        let bar = "#".repeat(bin.count * 40 / tallest);
        println!("{:>8.0} - {:<8.0} {}", bin.lower, bin.upper, bar);
    }

    println!("\nSimulation Complete.");
    ExitCode::SUCCESS
}
