// Hotel Booking Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-booking-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/hotel-booking-simulator --days 30 --hour-per-step 2 --seed 42 --verbose
// ```

use clap::Parser;
use hotel_booking_simulator::simulation::{LoggingConfig, SimulationDriver, StatisticsSnapshot};
use hotel_booking_simulator::types::config::CliArgs;
use hotel_booking_simulator::types::SimulationConfig;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Hotel Booking Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    // Print startup banner and configuration
    print_startup_banner(&config);

    let skip_after = args.skip_to_end;

    // Run the simulation
    info!("Starting simulation");
    if let Err(e) = run_simulation(config, skip_after) {
        error!("Simulation failed: {}", e);
        process::exit(1);
    }

    info!("Hotel Booking Simulator completed successfully");
}

/// Run the stepped simulation loop, optionally skipping to the end after a
/// number of interactive steps
fn run_simulation(config: SimulationConfig, skip_after: Option<usize>) -> Result<(), String> {
    let mut driver = SimulationDriver::new(config)
        .map_err(|e| format!("Failed to initialize simulation: {}", e))?;

    let mut steps = 0usize;
    loop {
        if let Some(limit) = skip_after {
            if steps >= limit {
                eprintln!("Skipping remaining steps...");
                driver.goto_end();
                print_step_report(&driver);
                break;
            }
        }

        if !driver.step() {
            break;
        }
        steps += 1;
        print_step_report(&driver);
    }

    print_final_statistics(&driver.snapshot());
    Ok(())
}

/// Print the current time, this step's reservation log, and per-type occupancy
fn print_step_report(driver: &SimulationDriver) {
    let (day, hour) = driver.time_display();
    println!("Day {} Hour {}", day, hour);
    print!("{}", driver.reservation_log());

    for (room_type, counts) in driver.occupancy_display() {
        println!("  {} : {}", room_type, counts);
    }
    println!();
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Hotel Booking Simulator");
    eprintln!("=======================");
    eprintln!("A day-by-day hotel reservation simulation");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Days: {}", config.days);
    eprintln!("  Hours per Step: {}", config.hour_per_step);
    eprintln!(
        "  Requests per Step: {} - {}",
        config.min_requests_per_step, config.max_requests_per_step
    );
    eprintln!("  Rooms:");
    for (room_type, count) in config.rooms_per_type() {
        eprintln!("    {} : {}", room_type, count);
    }
    eprintln!("  Total Rooms: {}", config.total_rooms());
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print final run statistics
fn print_final_statistics(snapshot: &StatisticsSnapshot) {
    eprintln!();
    eprintln!("Simulation Statistics:");
    eprintln!("  Total Requests: {}", snapshot.total_requests);
    eprintln!("  Successful Requests: {}", snapshot.successful_requests);
    eprintln!("  Failed Requests: {}", snapshot.failed_requests);
    eprintln!("  Success Rate: {:.2}%", snapshot.success_rate);
    eprintln!("  Average Occupancy: {:.2}%", snapshot.avg_occupancy);
    eprintln!("  Total Profit: {}", snapshot.profit);
}
