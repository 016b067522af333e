//! `nimbus` — evaluate and check Nimbus configuration files.
//!
//! Configuration files hold one or more parenthesized forms; `eval`
//! runs them all and prints the final value (optionally as JSON for a
//! downstream loader), `check` stops after parsing and reports syntax
//! problems without touching the environment.

use clap::{Parser, Subcommand};
use nimbus_eval::{EvalContext, EvalError};
use nimbus_types::{Expr, SyntaxError};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Syntax {
        path: PathBuf,
        source: SyntaxError,
    },

    #[error("{path}: {source}")]
    Eval { path: PathBuf, source: EvalError },

    #[error("cannot render the result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "nimbus", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a configuration file and print the final value
    Eval(EvalArgs),

    /// Parse a configuration file and report syntax errors only
    Check(CheckArgs),
}

#[derive(Parser)]
struct EvalArgs {
    /// Path to the configuration file
    file: PathBuf,

    /// Print the result as JSON (atoms as strings, lists as arrays)
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct CheckArgs {
    /// Path to the configuration file
    file: PathBuf,
}

fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_file(path: &Path) -> Result<Vec<Expr>, CliError> {
    let source = read_source(path)?;
    nimbus_parser::parse_all(&source).map_err(|source| CliError::Syntax {
        path: path.to_path_buf(),
        source,
    })
}

fn eval_command(args: &EvalArgs) -> Result<(), CliError> {
    let forms = parse_file(&args.file)?;
    debug!(file = %args.file.display(), forms = forms.len(), "evaluating");
    let value = EvalContext::new()
        .eval_all(&forms)
        .map_err(|source| CliError::Eval {
            path: args.file.clone(),
            source,
        })?;
    if args.json {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn check_command(args: &CheckArgs) -> Result<(), CliError> {
    let forms = parse_file(&args.file)?;
    println!("{}: {} form(s), syntax OK", args.file.display(), forms.len());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Eval(args) => eval_command(args),
        Commands::Check(args) => check_command(args),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
