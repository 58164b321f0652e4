use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod graph;
mod math;
mod missing;

use graph::mst::compute_mst;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Opt {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Connect randomly placed islands with bridges of minimal total length
    Bridges {
        /// Number of islands to place
        #[arg(long, default_value_t = 5)]
        islands: usize,

        /// Islands are placed on the integer grid [0, extent] x [0, extent]
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(0..))]
        extent: i64,

        /// Seed the random number generator for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Find the numbers from 1..=max that a random sample never drew
    Missing {
        /// Size of the random sample
        #[arg(long, default_value_t = 5)]
        size: usize,

        /// Samples are drawn from 1..=max
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        max: u32,

        /// Seed the random number generator for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct BridgeReport<'a> {
    islands: &'a [[i64; 2]],
    total_length: f64,
    bridges: &'a [[usize; 2]],
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("archipelago=info")),
        )
        .init();

    match run(Opt::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    match opt.task {
        Task::Bridges {
            islands,
            extent,
            seed,
            json,
        } => {
            let mut rng = seeded_rng(seed);
            let points = place_islands(&mut rng, islands, extent);
            debug!("placed islands at {:?}", points);

            let network = compute_mst(&points)?;
            info!(
                "connected {} islands with {} bridges",
                islands,
                network.edges.len()
            );

            if json {
                let report = BridgeReport {
                    islands: &points,
                    total_length: network.total_length,
                    bridges: &network.edges,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Island coordinates: {:?}", points);
                println!("Total bridge length: {}", network.total_length);
                println!("Bridges (island index pairs): {:?}", network.edges);
            }
        }
        Task::Missing { size, max, seed } => {
            let mut rng = seeded_rng(seed);
            let sample = draw_sample(&mut rng, size, max);
            let absent = missing::find_missing_numbers(&sample, max);
            info!("{} of {} numbers never drawn", absent.len(), max);

            println!("Sample: {:?}", sample);
            println!("Missing numbers: {:?}", absent);
        }
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn place_islands(rng: &mut StdRng, islands: usize, extent: i64) -> Vec<[i64; 2]> {
    (0..islands)
        .map(|_| [rng.gen_range(0..=extent), rng.gen_range(0..=extent)])
        .collect()
}

fn draw_sample(rng: &mut StdRng, size: usize, max: u32) -> Vec<u32> {
    (0..size).map(|_| rng.gen_range(1..=max)).collect()
}

pub fn abs_distance_squared(a: [i64; 2], b: [i64; 2]) -> i64 {
    (a[0] - b[0]).pow(2) + (a[1] - b[1]).pow(2)
}

#[cfg(test)]
#[test]
fn islands_stay_on_the_grid() {
    let mut rng = StdRng::seed_from_u64(5);
    for point in place_islands(&mut rng, 200, 30) {
        assert!((0..=30).contains(&point[0]));
        assert!((0..=30).contains(&point[1]));
    }
}

#[cfg(test)]
#[test]
fn seeded_placement_is_reproducible() {
    let a = place_islands(&mut StdRng::seed_from_u64(11), 10, 100);
    let b = place_islands(&mut StdRng::seed_from_u64(11), 10, 100);
    assert_eq!(a, b);
}
