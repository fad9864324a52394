//! Oracle evaluation driver for the trajectory-error kernel.
//!
//! Usage:
//! ```text
//! cargo run --example oracle_eval                   # built-in scenarios
//! cargo run --example oracle_eval -- FILE [FILE..]  # oracle test files
//! ```
//!
//! An oracle file holds six lines: reference x-coordinates (comma-separated),
//! reference y-coordinates, measured x- and y-coordinates, the expected error,
//! and the tolerated deviation. Oracles in this format are collected at
//! <https://github.com/rouvoy/indoor-location-oracles>.

use tracing::{error, info, warn};
use veer::geometry::Path;
use veer::math::Point2;
use veer::operations::TrajectoryError;
use veer::oracle::Oracle;
use veer::Result;

fn main() -> Result<()> {
    // Default: INFO for the demo, WARN for everything else.
    // Override with RUST_LOG env var (e.g. RUST_LOG=veer=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("oracle_eval=info".parse().unwrap_or_default())
        .add_directive("veer=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        run_builtin_scenarios()
    } else {
        run_oracle_files(&files)
    }
}

fn run_oracle_files(files: &[String]) -> Result<()> {
    let mut failures = 0usize;
    for file in files {
        let oracle = match Oracle::load(file) {
            Ok(oracle) => oracle,
            Err(err) => {
                error!(file, %err, "unreadable oracle");
                failures += 1;
                continue;
            }
        };
        let computed = TrajectoryError::new(&oracle.reference, &oracle.measured).execute()?;
        if oracle.accepts(computed) {
            info!(
                file,
                computed,
                expected = oracle.expected,
                tolerance = oracle.tolerance,
                "PASS"
            );
        } else {
            warn!(
                file,
                computed,
                expected = oracle.expected,
                tolerance = oracle.tolerance,
                "FAIL"
            );
            failures += 1;
        }
    }
    info!(total = files.len(), failures, "oracle run finished");
    Ok(())
}

fn run_builtin_scenarios() -> Result<()> {
    let scenarios: [(&str, Path, Path); 3] = [
        (
            "parallel offset",
            path(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.0, 4.0)]),
            path(&[(1.0, 0.0), (1.0, 1.0), (1.0, 2.0), (1.0, 3.0), (1.0, 4.0)]),
        ),
        (
            "single crossing",
            path(&[(0.0, 0.0), (0.0, 1.0)]),
            path(&[(1.0, 0.0), (-1.0, 1.0)]),
        ),
        (
            "dense staircase",
            path(&[(0.0, 0.0), (5.0, 0.0)]),
            path(&[
                (0.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (2.0, 1.0),
                (3.0, 1.0),
                (4.0, 1.0),
                (5.0, 1.0),
                (5.0, 0.0),
            ]),
        ),
    ];

    for (name, reference, measured) in &scenarios {
        let computed = TrajectoryError::new(reference, measured).execute()?;
        info!(name, computed, "scenario");
    }
    Ok(())
}

fn path(coords: &[(f64, f64)]) -> Path {
    Path::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}
