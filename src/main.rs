use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use fncalc::{DEFAULT_MAX_DEPTH, EvalConfig, Session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// fncalc evaluates calculator statements: expressions, constants such as
/// `r = 2` and functions such as `area(r) = pi r^2`.
///
/// Statements are evaluated in order, each one seeing the results and
/// definitions of the ones before it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read statements from a file, one per line. Blank lines and lines
    /// starting with '#' are ignored.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum nesting of function applications.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Let function applications nest without limit.
    #[arg(long, conflicts_with = "max_depth")]
    no_depth_limit: bool,

    /// Only print the value of the last statement that produced one.
    #[arg(short, long)]
    quiet: bool,

    /// Increase log output on stderr (-v, -vv, -vvv). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Statements to evaluate. Standard input is read when neither these nor
    /// a file are given.
    statements: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let statements = match collect_statements(&args) {
        Ok(statements) => statements,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let max_depth = (!args.no_depth_limit).then_some(args.max_depth);
    let mut session = Session::with_config(EvalConfig { max_depth });
    info!(count = statements.len(), ?max_depth, "evaluating statements");

    let mut failed = false;
    let mut last = None;
    for statement in &statements {
        match session.eval(statement) {
            Ok(Some(value)) => {
                if !args.quiet {
                    println!("{value}");
                }
                last = Some(value);
            },
            Ok(None) => {},
            Err(e) => {
                debug!(statement = statement.as_str(), "statement failed");
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if args.quiet
       && let Some(value) = last
    {
        println!("{value}");
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn collect_statements(args: &Args) -> io::Result<Vec<String>> {
    let mut statements = Vec::new();

    if let Some(path) = &args.file {
        statements.extend(statement_lines(fs::read_to_string(path)?.lines()));
    }
    statements.extend(args.statements.iter().cloned());

    if args.file.is_none() && args.statements.is_empty() {
        let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
        statements.extend(statement_lines(lines.iter().map(String::as_str)));
    }

    Ok(statements)
}

fn statement_lines<'a>(lines: impl Iterator<Item = &'a str>) -> impl Iterator<Item = String> {
    lines.map(str::trim)
         .filter(|line| !line.is_empty() && !line.starts_with('#'))
         .map(ToString::to_string)
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
