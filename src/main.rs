use std::process::ExitCode;

use life_bench::{Config, Report, Simulation, render};

const RULE: &str = "---------------------------------------------";

fn print_banner(config: &Config) {
    println!("--- Conway's Game of Life Parallel Benchmark ---");
    println!("Grid Dimensions: {}x{}", config.width, config.height);
    println!("Total Generations: {}", config.generations);
    println!("Number of Threads: {}", config.threads);
    if config.playback_enabled() {
        println!("Grid displaying interval: {} generations", config.display_interval);
    } else {
        println!("Not displaying grid, since display_interval is 0");
    }
    println!("Seed: {}", config.seed);
    println!("{RULE}");
}

fn print_playback(config: &Config, report: &Report) {
    if !config.playback_enabled() {
        println!("--- There is no playback, since display_interval is 0 ---");
        return;
    }
    println!("--- Playing back buffered grid states ---");
    for snapshot in &report.snapshots {
        println!("Displaying Buffered Grid {}:", snapshot.generation);
        println!("{}", render(&snapshot.grid));
    }
    println!("--- End of Playback ---");
}

fn print_summary(report: &Report) {
    println!("{RULE}");
    match report.average_generation_ms() {
        Some(avg) => println!("Overall average generation time: {avg:.4} ms"),
        None => println!("No generations were simulated, no average time to report."),
    }
    println!("Simulation finished after {} generations.", report.generations());
    println!("Total simulation compute time: {:.6} seconds.", report.total_seconds());
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "life_bench".to_string());

    let config = match Config::parse(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            eprint!("{}", Config::usage(&program));
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{config:?}");

    print_banner(&config);

    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("{err}");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("initial population: {}", simulation.grid().population());

    let report = simulation.run();
    print_playback(&config, &report);
    print_summary(&report);
    ExitCode::SUCCESS
}
