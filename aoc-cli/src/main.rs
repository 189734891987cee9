//! Command-line runner for the Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_core::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;

    let executor = Executor::new(registry, &config)
        .map_err(|e| error::CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Missing inputs still run (and fail) so they show up in the results;
    // point them out up front
    let missing: Vec<_> = work_items
        .iter()
        .filter(|work| !executor.has_input(work.year, work.day))
        .collect();
    if !missing.is_empty() {
        println!(
            "Missing {} input file(s) under {}:",
            missing.len(),
            config.input_dir.display()
        );
        for work in &missing {
            println!("  - {}/day{:02}", work.year, work.day);
        }
    }

    run_executor(executor, config.quiet)
}

/// Run the executor and stream results in order
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let work_items = executor.collect_work_items();
    println!("Running {} solver(s)...", work_items.len());

    // Every (year, day, part) we expect a result for
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|work| {
            work.parts.clone().map(move |part| aggregator::ResultKey {
                year: work.year,
                day: work.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    // Run the executor in a background thread; results stream back here
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain anything still buffered (only hit when results went missing)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| error::CliError::Config("Executor thread panicked".to_string()))?
        .map_err(error::CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build the registry, filtered by tags when given
fn build_registry(tags: &[String]) -> Result<aoc_core::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_filtered(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
