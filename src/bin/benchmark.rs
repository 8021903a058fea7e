//! Thread-scaling benchmark for the grid update step

use std::time::Instant;
use life_bench::{Engine, Grid, application::available_threads, presets};

const SEED: u64 = 1749994962;

/// Average milliseconds per generation for the single-threaded step
fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::seeded(size, size, SEED);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step_serial();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_engine(engine: &Engine, size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::seeded(size, size, SEED);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = engine.step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Step every preset on every engine and compare with the serial result and,
/// for the block and blinker, with their known still-life and period-2 shapes.
fn verify_patterns(engines: &[Engine]) -> Result<(), String> {
    for pattern in presets::all_patterns() {
        let grid = pattern.centered(16, 16);
        let expected = grid.step_serial();
        for engine in engines {
            if engine.step(&grid) != expected {
                return Err(format!("{} diverged on {} threads", pattern.name, engine.threads()));
            }
        }
        println!("  {:<10} ok  ({})", pattern.name, pattern.description);
    }

    let block = presets::block().centered(8, 8);
    let blinker = presets::blinker().centered(8, 8);
    for engine in engines {
        if engine.step(&block) != block {
            return Err(format!("block changed on {} threads", engine.threads()));
        }
        let flipped = engine.step(&blinker);
        if flipped == blinker || engine.step(&flipped) != blinker {
            return Err(format!("blinker lost period 2 on {} threads", engine.threads()));
        }
    }
    Ok(())
}

/// 1, 2, 4, ... up to and including the machine's limit
fn thread_counts(max: usize) -> Vec<usize> {
    let mut counts: Vec<usize> = std::iter::successors(Some(1), |n| Some(n * 2))
        .take_while(|&n| n < max)
        .collect();
    counts.push(max);
    counts
}

fn main() {
    env_logger::init();
    println!("=== Game of Life Thread Scaling Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000];
    let iterations = 20;
    let counts = thread_counts(available_threads());

    let engines = counts.iter().map(|&n| Engine::new(n)).collect::<Result<Vec<_>, _>>();
    let engines = match engines {
        Ok(engines) => engines,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    println!("Checking patterns on {} engines:", engines.len());
    if let Err(err) = verify_patterns(&engines) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    println!();

    print!("{:>12} {:>12}", "Size", "Serial");
    for n in &counts {
        print!(" {:>12}", format!("{n} thr"));
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<1$}", "", 36 + 13 * counts.len());

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let times: Vec<f64> = engines
            .iter()
            .map(|engine| benchmark_engine(engine, size, iterations))
            .collect();
        let fastest = times.iter().copied().fold(f64::INFINITY, f64::min);

        print!("{:>12} {:>12.2}", format!("{size}x{size}"), serial_ms);
        for ms in &times {
            print!(" {ms:>12.2}");
        }
        println!(" {:>9.1}x", serial_ms / fastest);
    }

    println!("\n=== Throughput at 2000x2000 ===\n");
    let cells = 2000.0 * 2000.0;
    for engine in &engines {
        let ms = benchmark_engine(engine, 2000, iterations);
        println!(
            "{:>3} threads: {:.2} ms/gen, {:.1}M cells/sec",
            engine.threads(),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
