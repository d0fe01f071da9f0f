use anyhow::Context;
use clap::Parser;
use pattern_completeness::parser::parse_source;
use pattern_completeness::program::Program;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Checks that every interface in a file is covered by its implementations
#[derive(Parser)]
#[command(name = "patchk", version, about, long_about = None)]
struct Cli {
    /// File of `interface` and `impl` declarations
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Give up on an interface after this many solver rounds
    #[arg(long, value_name = "N")]
    max_rounds: Option<usize>,
}

fn main() -> ExitCode {
    // PATCHK_LOG takes an env filter, e.g. `pattern_completeness=trace`
    if let Ok(filter) = EnvFilter::try_from_env("PATCHK_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Prints one report per interface and returns whether all of them are complete.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let source = std::fs::read_to_string(&cli.file).with_context(|| format!("cannot read {}", cli.file.display()))?;
    let program = Program::new(parse_source(&source)?)?;
    let reports = program.check(cli.max_rounds)?;
    for report in &reports {
        println!("{report}");
    }
    Ok(reports.iter().all(|r| r.is_complete()))
}
