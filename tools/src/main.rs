//! occupancy-runner: compute the occupancy distribution for one alphabet size.
//!
//! Usage:
//!   occupancy-runner 1000
//!   occupancy-runner -v --config engine.json 64
//!   occupancy-runner --oracle all --reps 200 --seed 7 8
//!   occupancy-runner --json 5000

use anyhow::{bail, Result};
use occupancy_core::{
    config::{EngineConfig, SamplerConfig},
    engine::DistributionEngine,
    oracle::{
        self, brute_force::BruteForce, naive::NaiveRecursion, sampler::CoverageSampler,
        ClosedForm, CoverageOracle,
    },
    summary::Summary,
    types::Alphabet,
};
use std::env;

const USAGE: &str = "Usage: occupancy-runner [-v] [--json] [--config FILE] \
[--oracle naive|brute|sample|closed|all] [--reps R] [--seed S] N";

#[derive(serde::Serialize)]
struct OracleLine {
    oracle:   &'static str,
    coverage: f64,
    /// Difference to the engine's coverage, in percentage points.
    delta:    f64,
}

#[derive(serde::Serialize)]
struct Report {
    summary:       Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    probabilities: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    oracles:       Vec<OracleLine>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "-v");
    let json = args.iter().any(|a| a == "--json");
    let Some(n) = args.last().and_then(|a| a.parse::<Alphabet>().ok()) else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let mut config = match find_value(&args, "--config") {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if json {
        config.progress_interval = 0;
    }
    let sampler = SamplerConfig {
        seed:        parse_arg(&args, "--seed", SamplerConfig::default().seed),
        repetitions: parse_arg(&args, "--reps", SamplerConfig::default().repetitions),
    };

    let engine = DistributionEngine::new(config);
    let dist = engine.run(n)?;
    let summary = dist.summary();

    let mut oracles: Vec<Box<dyn CoverageOracle>> = match find_value(&args, "--oracle") {
        None => Vec::new(),
        Some("naive") => vec![Box::new(NaiveRecursion)],
        Some("brute") => vec![Box::new(BruteForce)],
        Some("sample") => vec![Box::new(CoverageSampler::new(sampler))],
        Some("closed") => vec![Box::new(ClosedForm)],
        Some("all") => oracle::all_oracles(n, engine.config().clone(), sampler)
            .into_iter()
            .skip(1)
            .collect(),
        Some(other) => bail!("Unknown oracle '{other}'\n{USAGE}"),
    };
    let mut lines = Vec::with_capacity(oracles.len());
    for o in &mut oracles {
        let coverage = o.coverage(n)?;
        lines.push(OracleLine {
            oracle: o.name(),
            coverage,
            delta: 100.0 * (coverage - summary.coverage()),
        });
    }

    if json {
        let report = Report {
            probabilities: verbose.then(|| dist.probabilities()),
            summary,
            oracles: lines,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        print!("({}): ", dist.first());
        for p in &dist.probabilities()[dist.first() - 1..] {
            print!("{p:e} ");
        }
        println!();
    }
    println!("{:.6}%", summary.normalized_percentage);
    if verbose {
        println!(
            "DEBUG: Opts counted {:.6}, calculated {:.6}, scale = 1/{:.6}",
            summary.total,
            summary.norm,
            1.0 / summary.scale
        );
        let k = n * 16 / 25;
        if k >= 1 {
            println!("DEBUG: prob({k}) = {:e}", dist.probability_of(k));
        }
    }
    for line in &lines {
        println!(
            "  {:<12} {:>10.6}%  ({:+.6} pts)",
            line.oracle,
            100.0 * line.coverage,
            line.delta
        );
    }
    Ok(())
}

fn find_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
