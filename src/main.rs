use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lox_scan::render::{self, Format};
use lox_scan::report::StderrReporter;
use lox_scan::{repl, scanner};

/// Exit status when the input contained scan errors.
const EXIT_DATA_ERR: u8 = 65;

#[derive(Parser, Debug)]
#[command(name = "lox-scan", about = "Scan Lox source into tokens")]
struct Cli {
    /// Lox source file to scan (omit for REPL)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Also render scan errors with source snippets
    #[arg(long)]
    fancy: bool,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn scan_file(path: &Path, format: Format, fancy: bool) -> Result<ExitCode> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;

    let outcome = scanner::scan_with(&source, &mut StderrReporter);
    let rendered = render::render(&outcome.tokens, format).context("render tokens")?;
    print!("{rendered}");

    if !outcome.had_error() {
        return Ok(ExitCode::SUCCESS);
    }

    if fancy {
        let name = path.display().to_string();
        for error in outcome.errors {
            let report = miette::Report::new(error.with_source_code(name.clone(), source.clone()));
            eprintln!("{report:?}");
        }
    }
    Ok(ExitCode::from(EXIT_DATA_ERR))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.file {
        Some(ref path) => scan_file(path, cli.format, cli.fancy),
        None => {
            repl::run_repl(cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
