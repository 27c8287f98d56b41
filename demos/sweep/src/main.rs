//! sweep: run a detector study and write its hit statistics.
//!
//! ```text
//! sweep [PRESET | CONFIG.json] [OUT_DIR]
//! ```
//!
//! `PRESET` is one of the built-in studies (default `rectangle_2d`).  A path
//! ending in `.json` is loaded as a `SimulationConfig`.  Results go to
//! `OUT_DIR` (default `output/<name>`) as `sweep_summary.csv` and
//! `sensor_hits.csv`.

mod presets;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};

use hs_output::{CsvWriter, ReportObserver};
use hs_sim::{ProgressPrinter, SimulationBuilder, SimulationConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:    u64 = 42;
const WORKERS: u32 = 8; // fixed so results do not depend on the host

// ── Config loading ────────────────────────────────────────────────────────────

fn load_config(arg: &str) -> Result<(String, SimulationConfig)> {
    if arg.ends_with(".json") {
        let path = Path::new(arg);
        let file = File::open(path).with_context(|| format!("opening {arg}"))?;
        let config: SimulationConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {arg}"))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("config")
            .to_owned();
        return Ok((name, config));
    }
    match presets::by_name(arg, SEED, WORKERS) {
        Some(config) => Ok((arg.to_owned(), config)),
        None => bail!("unknown preset {arg:?}; expected one of {:?} or a .json path", presets::NAMES),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| presets::NAMES[0].to_owned());
    let (name, config) = load_config(&source)?;
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("output").join(&name));

    println!("=== sweep: {name} ===");
    println!(
        "{} lattice, L = {}  |  runs: {}  |  workers: {}  |  seed: {}",
        config.grid.dimensionality, config.grid.length, config.runs, config.workers, config.seed
    );
    if let Some(sweep) = &config.sweep {
        println!("Sweeping {} over {} values", sweep.parameter, sweep.len());
    }
    println!();

    let driver = SimulationBuilder::new(config).build()?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = (ProgressPrinter::new(), ReportObserver::new(writer));

    let t0 = Instant::now();
    driver.run(&mut obs);
    let elapsed = t0.elapsed();

    let (_, report) = &mut obs;
    if let Some(e) = report.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!("Completed in {:.3} s, output in {}", elapsed.as_secs_f64(), out_dir.display());
    println!();
    println!("{:<12} {:>12} {:>14} {:>16}", "Value", "Hits", "Hits/run", "P(hit)/sensor");
    println!("{}", "-".repeat(57));
    for (value, hits, avg, p) in report.reporter().records() {
        let value = value.map(|v| format!("{v:.4}")).unwrap_or_else(|| "-".to_owned());
        println!("{value:<12} {hits:>12} {avg:>14.6} {p:>16.3e}");
    }
    for rejected in report.reporter().rejected() {
        println!("rejected [{}] {:?}: {}", rejected.index, rejected.value, rejected.message);
    }

    Ok(())
}
