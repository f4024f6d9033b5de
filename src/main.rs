//! Command-line driver: read an instance, anneal it, print the layout.

use anyhow::Context;
use clap::Parser;
use rect_anneal::input::{parse_input, read_instance, Instance};
use rect_anneal::sa::SaConfig;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rect-anneal")]
#[command(about = "Place rectangles in a field with minimal overlap via simulated annealing")]
#[command(version)]
struct Cli {
    /// Instance file (`k n m` then `x1 y1 x2 y2` per rectangle). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Prompt for each value on the terminal instead of reading a token stream
    #[arg(short, long, conflicts_with = "input")]
    interactive: bool,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting temperature
    #[arg(long, default_value_t = 500.0)]
    initial_temperature: f64,

    /// Geometric cooling factor in (0, 1)
    #[arg(long, default_value_t = 0.99)]
    cooling_rate: f64,

    /// Temperature at or below which the search stops
    #[arg(long, default_value_t = 1.0)]
    stopping_temperature: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SaConfig::default()
        .with_initial_temperature(cli.initial_temperature)
        .with_cooling_rate(cli.cooling_rate)
        .with_stopping_temperature(cli.stopping_temperature);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate().context("invalid annealing parameters")?;

    let instance = if cli.interactive {
        prompt_instance()?
    } else {
        let text = match &cli.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                text
            }
        };
        parse_input(&text)?
    };

    let problem = instance.into_problem()?;
    let result = problem.solve(&config)?;

    let mut out = io::stdout().lock();
    writeln!(out, "The best solution found by simulated annealing is:")?;
    for (i, rect) in result.rectangles.iter().enumerate() {
        writeln!(out, "Rectangle {}: {}", i + 1, rect)?;
    }
    writeln!(out, "Final intersection area: {}", result.intersection_area)?;

    Ok(())
}

/// Asks for every value on stdout and reads one line of stdin per answer.
fn prompt_instance() -> anyhow::Result<Instance> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut read_error = None;

    let instance = read_instance(|what| {
        print!("Enter {what}: ");
        if let Err(e) = io::stdout().flush() {
            read_error = Some(e);
            return None;
        }
        match lines.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                read_error = Some(e);
                None
            }
        }
    });

    if let Some(e) = read_error {
        return Err(e).context("failed to read from terminal");
    }
    Ok(instance?)
}
