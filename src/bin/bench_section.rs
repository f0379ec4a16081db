//! Benchmark the section scan at large scales.
//!
//! Run with: cargo run --release --bin bench_section
//!
//! Usage:
//!   bench_section              Run default size (1m)
//!   bench_section 100k 1m 10m  Run multiple sizes
//!   bench_section --tau 25     Embedding delay for the synthetic signal
//!   bench_section -n 10        Run 10 iterations (for profiling)

use clap::Parser;
use poincare::embedding::delay_embed;
use poincare::section::{compute_with, SectionConfig, SectionPlane};
use poincare::util::millis;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('m') {
        (stripped, 1_000_000)
    } else if let Some(stripped) = s.strip_suffix('k') {
        (stripped, 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "bench_section")]
#[command(about = "Benchmark Poincaré section scans at various scales")]
struct Args {
    /// Sample counts to benchmark (e.g., 100k, 1m, 10M)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Embedding delay for the synthetic signal
    #[arg(long, default_value_t = 17)]
    tau: usize,

    /// Noise amplitude added to the synthetic signal
    #[arg(long, default_value_t = 0.05)]
    noise: f64,

    /// Number of iterations to run (useful for profiling)
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

/// Quasi-periodic signal with uniform noise.
fn generate_signal(n: usize, noise: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let w1 = 0.05;
    let w2 = w1 * std::f64::consts::SQRT_2;
    (0..n)
        .map(|i| {
            let t = i as f64;
            let jitter = if noise > 0.0 {
                rng.gen_range(-noise..noise)
            } else {
                0.0
            };
            (w1 * t).sin() + 0.5 * (w2 * t).cos() + jitter
        })
        .collect()
}

/// Adjacent pairs scanned per second, in millions.
fn pair_rate(pairs: usize, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return "-".to_string();
    }
    format!("{:.1}M pairs/s", pairs as f64 / secs / 1e6)
}

/// Size in the same form `parse_count` accepts: `250k`, `3m`, `1500`.
fn size_label(n: usize) -> String {
    if n >= 1_000_000 && n % 1_000_000 == 0 {
        format!("{}m", n / 1_000_000)
    } else if n >= 1_000 && n % 1_000 == 0 {
        format!("{}k", n / 1_000)
    } else {
        n.to_string()
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let sizes = if args.sizes.is_empty() {
        vec![1_000_000]
    } else {
        args.sizes.clone()
    };
    let plane = SectionPlane::default();

    println!(
        "Section scan benchmark: tau={}, noise={}, threads={}",
        args.tau,
        args.noise,
        rayon::current_num_threads()
    );

    for &n in &sizes {
        let signal = generate_signal(n + 2 * args.tau, args.noise, args.seed);
        let series = match delay_embed(&signal, args.tau) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("{}: {}", size_label(n), e);
                continue;
            }
        };
        let trajectory = match series.trajectory() {
            Ok(trajectory) => trajectory,
            Err(e) => {
                eprintln!("{}: {}", size_label(n), e);
                continue;
            }
        };

        let pairs = trajectory.len().saturating_sub(1);
        for iter in 0..args.repeat {
            let start = Instant::now();
            let seq = compute_with(&trajectory, plane, SectionConfig::sequential());
            let seq_time = start.elapsed();

            let start = Instant::now();
            let config = SectionConfig {
                parallel_threshold: 0,
            };
            let par = compute_with(&trajectory, plane, config);
            let par_time = start.elapsed();

            let (seq, par) = match (seq, par) {
                (Ok(seq), Ok(par)) => (seq, par),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("{}: {}", size_label(n), e);
                    break;
                }
            };
            let status = if seq.crossings == par.crossings {
                "ok"
            } else {
                "MISMATCH"
            };

            println!(
                "{:>6} [{}] crossings={:<8} seq {:>8.2}ms ({})  par {:>8.2}ms ({})  {}",
                size_label(n),
                iter,
                seq.crossings.len(),
                millis(seq_time),
                pair_rate(pairs, seq_time),
                millis(par_time),
                pair_rate(pairs, par_time),
                status
            );
        }
    }
}
