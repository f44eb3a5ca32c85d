//! xmlcmp - Structural XML comparison CLI
//!
//! Compares an actual document against an expected one and prints every
//! difference with its location.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use xmlcmp::{DiffSet, Fragment, Options};

/// Structural XML comparison
#[derive(Parser)]
#[command(name = "xmlcmp")]
#[command(version)]
#[command(about = "Reports where two XML documents structurally differ", long_about = None)]
struct Cli {
    /// Document under test
    actual: String,
    /// Reference document
    expected: String,

    /// Equivalence options: flag or preset names separated by '|' or ','
    /// (e.g. "default", "strict", "loose", "IgnoreComments | IgnoreElementsOrder")
    #[arg(short, long, default_value = "default")]
    options: Options,

    /// Log parsing and comparison details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

/// Compares the two files, returning whether they are equivalent.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    debug!(options = %cli.options, "comparing {} against {}", cli.actual, cli.expected);
    let actual = xmlcmp::parse_file(&cli.actual)?;
    let expected = xmlcmp::parse_file(&cli.expected)?;

    let diffs = actual.diff(&expected, cli.options);
    let mut output = BufWriter::new(io::stdout().lock());
    report(&mut output, &diffs, &actual, &expected)?;
    output.flush()?;

    if diffs.is_empty() {
        eprintln!("Documents are equivalent ({}).", cli.options);
    } else {
        eprintln!("{} difference(s) found ({}).", diffs.len(), cli.options);
    }
    Ok(diffs.is_empty())
}

/// Writes one block per difference, separated by blank lines.
fn report<W: Write>(
    output: &mut W,
    diffs: &DiffSet,
    actual: &Fragment,
    expected: &Fragment,
) -> io::Result<()> {
    for (i, description) in diffs.describe(actual, expected).iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        writeln!(output, "{}", description)?;
    }
    Ok(())
}
