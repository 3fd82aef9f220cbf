//! Evolution throughput on seeded regions, serial vs parallel

use std::time::Instant;
use sparse_life::{LiveSet, Region, RegionManager, SimConfig};
use sparse_life::domain::{Algorithm, RegionGrid};

/// Seed a square block of `side * side` regions
fn seeded_soup(config: &SimConfig, side: i32) -> LiveSet {
    let mut manager = RegionManager::new(config);
    let grid = RegionGrid::new(config.region_size, config.bounds());
    let mut live = LiveSet::new();
    for ky in 0..side {
        for kx in 0..side {
            let region: Region = grid.region_at_tile(kx, ky);
            if let Err(e) = manager.seed(region, &mut live) {
                eprintln!("seeding failed: {e}");
                std::process::exit(1);
            }
        }
    }
    live
}

fn benchmark(algorithm: Algorithm, config: &SimConfig, start: &LiveSet, iterations: u32) -> f64 {
    let mut live = start.clone();
    let begin = Instant::now();
    for _ in 0..iterations {
        live = algorithm.step(&live, config.bounds());
    }
    begin.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse Life Evolution Benchmark ===\n");

    let config = SimConfig {
        seed: Some(2024),
        ..SimConfig::default()
    };
    let iterations = 10;

    println!("{:>8} {:>10} {:>12} {:>12} {:>10} {:>14}",
        "Regions", "Cells", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<72}", "");

    for side in [1, 2, 3, 4, 6] {
        let soup = seeded_soup(&config, side);
        let serial_ms = benchmark(Algorithm::Serial, &config, &soup, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, &config, &soup, iterations);
        let fastest = serial_ms.min(parallel_ms);

        println!(
            "{:>8} {:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x {:>13.1}M",
            side * side,
            soup.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            soup.len() as f64 / (fastest / 1000.0) / 1_000_000.0
        );
    }
}
