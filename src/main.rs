use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use taxi_heap::errors::InputError;
use taxi_heap::from_wkt::parse_wkt_points;
use taxi_heap::{Coordinate, LocationReader, Report, Simulation, SimulationConfig};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum InputFormat {
    /// Header line, then one `longitude latitude` pair per line
    Text,
    /// POINT / MULTIPOINT / LINESTRING geometries
    Wkt,
}

#[derive(Parser)]
#[command(
    name = "taxi-heap",
    about = "Dispatch the nearest taxi to a hotel using a binary min-heap",
    version
)]
struct Cli {
    /// Number of insert/update operations to run
    operations: usize,
    /// Probability that an operation moves a waiting taxi instead of adding one
    update_probability: f64,
    #[arg(long, default_value = "locations.txt")]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,
    /// Seed for reproducible runs; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Only print the summary
    #[arg(long)]
    quiet: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SimulationConfig::new(cli.operations, cli.update_probability)?;
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let report = simulate(&cli.input, cli.format, config, rng)?;
    print!("{}", format_report(&report, cli.quiet));
    Ok(())
}

fn simulate(
    input: &Path,
    format: InputFormat,
    config: SimulationConfig,
    rng: SmallRng,
) -> Result<Report> {
    let report = match format {
        InputFormat::Text => {
            let file = File::open(input)
                .with_context(|| format!("File cannot be opened: {}", input.display()))?;
            Simulation::new(config, LocationReader::new(BufReader::new(file)), rng).run()?
        }
        InputFormat::Wkt => {
            let contents = fs::read_to_string(input)
                .with_context(|| format!("File cannot be opened: {}", input.display()))?;
            let locations = parse_wkt_points(&contents)?
                .into_iter()
                .map(Ok::<Coordinate, InputError>);
            Simulation::new(config, locations, rng).run()?
        }
    };
    Ok(report)
}

fn format_report(report: &Report, quiet: bool) -> String {
    let mut out = String::new();
    if !quiet {
        for distance in &report.calls {
            out.push_str(&format!("Taxi called: {}\n", distance));
        }
    }
    out.push_str(&format!("Number of update operations: {}\n", report.updates));
    out.push_str(&format!("Number of insert operations: {}\n", report.inserts));
    out.push_str(&format!("Total runtime: {}ms\n", report.elapsed.as_millis()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use taxi_heap::errors::SimulationError;
    use taxi_heap::Distance;

    fn write_input(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "taxi_heap_{}_{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn sample_report() -> Report {
        Report {
            calls: vec![Distance(0.5), Distance(1.25)],
            updates: 7,
            inserts: 193,
            remaining: 191,
            elapsed: Duration::from_micros(42_700),
        }
    }

    #[test]
    fn test_format_report() {
        assert_eq!(
            format_report(&sample_report(), false),
            "Taxi called: 0.5\n\
             Taxi called: 1.25\n\
             Number of update operations: 7\n\
             Number of insert operations: 193\n\
             Total runtime: 42ms\n"
        );
    }

    #[test]
    fn test_format_report_quiet() {
        let report = format_report(&sample_report(), true);
        assert!(!report.contains("Taxi called"));
        assert!(report.starts_with("Number of update operations: 7\n"));
    }

    #[test]
    fn test_simulate_text_and_wkt() {
        let config = SimulationConfig::new(3, 0.).unwrap();

        let text = write_input("text.txt", "lng lat\n3 4\n0 1\n6 8\n");
        let rng = SmallRng::seed_from_u64(1);
        let report = simulate(&text, InputFormat::Text, config, rng).unwrap();
        assert_eq!(report.inserts, 3);
        assert_eq!(report.remaining, 3);

        let wkt = write_input("points.wkt", "MULTIPOINT ((3 4), (0 1), (6 8))");
        let rng = SmallRng::seed_from_u64(1);
        let report = simulate(&wkt, InputFormat::Wkt, config, rng).unwrap();
        assert_eq!(report.inserts, 3);

        // Read as text, the single WKT line is the header and no locations remain.
        let err = simulate(&wkt, InputFormat::Text, config, SmallRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimulationError>(),
            Some(SimulationError::LocationsExhausted { operation: 1 })
        ));

        fs::remove_file(text).unwrap();
        fs::remove_file(wkt).unwrap();
    }

    #[test]
    fn test_simulate_missing_file() {
        let missing = std::env::temp_dir().join("taxi_heap_does_not_exist.txt");
        let config = SimulationConfig::new(1, 0.).unwrap();
        let err = simulate(&missing, InputFormat::Text, config, SmallRng::seed_from_u64(1))
            .unwrap_err();
        assert!(err.to_string().starts_with("File cannot be opened"));
    }
}
