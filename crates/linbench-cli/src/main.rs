//! linbench command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linbench::{DEFAULT_SIZE, DemoConfig, MatrixKind, MemoryProfiler, build_and_solve};
use linbench_profile::TrackingAllocator;
use log::LevelFilter;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

/// Dense matrices above this size get a memory warning before allocation.
const DENSE_WARN_SIZE: usize = 5_000;

#[derive(Parser, Debug)]
#[command(name = "linbench")]
#[command(
    about = "Solve an identity system with dense or sparse storage and report memory use",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Matrix representation: dense or sparse
    #[arg(value_name = "MODE", default_value = "sparse", value_parser = parse_kind)]
    mode: MatrixKind,

    /// Matrix dimension N
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    /// Seed for the random right-hand side (default: fresh entropy every run)
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the memory report as JSON to this file
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Skip checking the solution against the right-hand side
    #[arg(long)]
    no_verify: bool,

    /// Sample heap only, not resident set size
    #[arg(long)]
    heap_only: bool,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> DemoConfig {
        let mut config = DemoConfig::default().with_size(self.size);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.no_verify {
            config = config.without_verification();
        }
        config
    }
}

fn parse_kind(s: &str) -> std::result::Result<MatrixKind, String> {
    s.parse::<MatrixKind>().map_err(|e| e.to_string())
}

fn parse_size(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("matrix dimension must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    if cli.mode == MatrixKind::Dense && config.size >= DENSE_WARN_SIZE {
        log::warn!(
            "Dense {}x{} matrix needs about {:.1} GiB plus a copy for factorization",
            config.size,
            config.size,
            cli.mode.estimated_storage_bytes(config.size) as f64 / (1u64 << 30) as f64
        );
    }

    let mut profiler = if cli.heap_only {
        MemoryProfiler::heap_only()
    } else {
        MemoryProfiler::new()
    };

    let outcome = build_and_solve(cli.mode, &config, &mut profiler)
        .with_context(|| format!("{} solve failed", cli.mode))?;
    let report = profiler.finish(format!("{} solve (n = {})", cli.mode, config.size));

    println!("{}", report.to_text());
    println!(
        "Matrix storage: {} bytes, solve time: {:.3?}, max |u - b| = {:e}",
        outcome.storage_bytes, outcome.elapsed, outcome.max_deviation
    );

    if let Some(ref path) = cli.json {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        log::info!("Wrote memory report to {}", path.display());
    }

    Ok(())
}

/// Log level from -v count; `RUST_LOG` overrides it.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_sparse_full_size() {
        let cli = Cli::try_parse_from(["linbench"]).unwrap();
        assert_eq!(cli.mode, MatrixKind::Sparse);
        assert_eq!(cli.size, 10_000);
        assert_eq!(cli.config(), DemoConfig::default());
    }

    #[test]
    fn parses_flags_into_config() {
        let cli = Cli::try_parse_from([
            "linbench", "dense", "-n", "300", "--seed", "7", "--no-verify", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.mode, MatrixKind::Dense);
        assert_eq!(cli.verbose, 2);

        let config = cli.config();
        assert_eq!(config.size, 300);
        assert_eq!(config.seed, Some(7));
        assert!(!config.verify);
    }

    #[test]
    fn rejects_zero_size() {
        let err = Cli::try_parse_from(["linbench", "dense", "-n", "0"]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        assert!(Cli::try_parse_from(["linbench", "dense", "-n", "1"]).is_ok());
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = Cli::try_parse_from(["linbench", "banana"]).unwrap_err();
        assert!(err.to_string().contains("unknown matrix type"));
    }
}
