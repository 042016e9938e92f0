//! FLUX Vanity Address Generator CLI
//!
//! Usage:
//!   flux_vanity                          # Find a t1 address with "FLUX" after the prefix
//!   flux_vanity -p moon -t anywhere      # Find "moon" anywhere in the address
//!   flux_vanity -a t3 -p Zel -c          # Case-sensitive "Zel" on an SSP address

use std::process;
use std::time::Duration;

use clap::Parser;

use flux_vanity::output::{append_record, FoundRecord};
use flux_vanity::reporter::format_number;
use flux_vanity::{Config, Pattern, ProgressReporter, WorkerPool, SHUTDOWN_GRACE};

fn main() {
    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    // Create the pattern
    let pattern = Pattern::new(
        config.effective_pattern(),
        config.position,
        config.case_sensitive,
    );

    // Print startup info
    println!("FLUX Vanity Address Generator");
    println!("=============================");
    println!("Network:    {}", config.network.label());
    println!(
        "Pattern:    {}{} ({}, {})",
        config.network.prefix(),
        config.effective_pattern(),
        pattern.position(),
        if config.case_sensitive {
            "case-sensitive"
        } else {
            "case-insensitive"
        }
    );
    println!("Difficulty: {}", pattern.difficulty_description());
    println!("Workers:    {}", config.worker_count());
    println!();

    // Create worker pool
    let pool = WorkerPool::new(config.worker_count(), pattern.clone(), config.network);

    // Set up ctrl-c handler
    ctrlc_handler(pool.stop_flag_clone());

    // Progress reporting runs beside the search
    let reporter = ProgressReporter::spawn(
        pool.stats_clone(),
        pool.stop_flag_clone(),
        Duration::from_secs(config.report_interval),
    );

    println!("Searching... (Press Ctrl+C to stop)\n");

    match pool.run() {
        Some(result) => {
            println!("\n=== MATCH FOUND ===");
            println!("Worker:      {}", result.worker_id);
            println!("Address:     {}", result.address);
            println!("Private key: {}", result.private_key);

            let record = FoundRecord {
                result: &result,
                profile: config.network,
                pattern: config.effective_pattern(),
                position: pattern.position(),
                case_sensitive: config.case_sensitive,
                keys_tested: pool.total_keys(),
            };
            match append_record(&config.output, &record) {
                Ok(()) => println!("Result saved to: {}", config.output.display()),
                Err(e) => eprintln!("Failed to save result: {}", e),
            }
        }
        None => {
            println!("\nNo result found or interrupted.");
        }
    }

    // Print final stats
    println!("\n--- Final Statistics ---");
    println!("Total keys tested: {}", format_number(pool.total_keys()));
    println!("Time elapsed:      {:.2}s", pool.elapsed().as_secs_f64());
    println!(
        "Average speed:     {}/s",
        format_number(pool.keys_per_second() as u64)
    );

    pool.join(SHUTDOWN_GRACE);
    reporter.join();
}

fn ctrlc_handler(stop_flag: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    ctrlc::set_handler(move || {
        stop_flag.store(true, std::sync::atomic::Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");
}
