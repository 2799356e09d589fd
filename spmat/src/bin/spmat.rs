//! SPMAT CLI - add, subtract or multiply sparse matrix files
//!
//! ## Commands
//!
//! - `spmat add <a> <b>` - Element-wise sum
//! - `spmat subtract <a> <b>` - Element-wise difference
//! - `spmat multiply <a> <b>` - Matrix product
//! - `spmat run <op> <a> <b>` - Operation chosen by name or menu number
//! - `spmat interactive` - Prompt for the operation and both files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use spmat::{
    write_result, CooMatrix, Operation, OutputFormat, RunConfig, SparseMatrix, DEFAULT_OUTPUT_DIR,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SPMAT - Sparse integer matrix arithmetic over text files
#[derive(Parser)]
#[command(name = "spmat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory result files are written to
    #[arg(long, global = true, env = "SPMAT_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Encoding of the result
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the result instead of writing a file
    #[arg(long, global = true)]
    stdout: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of the same shape
    Add {
        /// First matrix file
        first: PathBuf,
        /// Second matrix file
        second: PathBuf,
    },
    /// Subtract the second matrix from the first
    #[command(alias = "sub")]
    Subtract {
        /// First matrix file
        first: PathBuf,
        /// Second matrix file
        second: PathBuf,
    },
    /// Multiply the first matrix by the second
    #[command(alias = "mul")]
    Multiply {
        /// First matrix file
        first: PathBuf,
        /// Second matrix file
        second: PathBuf,
    },
    /// Run an operation selected by name or menu number (1-3)
    Run {
        /// add, subtract, multiply or 1, 2, 3
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// First matrix file
        first: PathBuf,
        /// Second matrix file
        second: PathBuf,
    },
    /// Prompt for the operation and both input files
    Interactive,
}

fn parse_operation(selector: &str) -> std::result::Result<Operation, String> {
    selector.parse().map_err(|err| format!("{err}"))
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (operation, first, second) = match &cli.command {
        Commands::Add { first, second } => (Operation::Add, first.clone(), second.clone()),
        Commands::Subtract { first, second } => {
            (Operation::Subtract, first.clone(), second.clone())
        }
        Commands::Multiply { first, second } => {
            (Operation::Multiply, first.clone(), second.clone())
        }
        Commands::Run {
            operation,
            first,
            second,
        } => (*operation, first.clone(), second.clone()),
        Commands::Interactive => match prompt_inputs()? {
            Some(inputs) => inputs,
            None => return Ok(()),
        },
    };

    let config = RunConfig::default()
        .with_output_dir(&cli.output_dir)
        .with_format(cli.format);
    execute(&config, operation, &first, &second, cli.stdout)
}

/// Load both inputs, combine them and emit the result
fn execute(
    config: &RunConfig,
    operation: Operation,
    first: &Path,
    second: &Path,
    to_stdout: bool,
) -> Result<()> {
    debug!(%operation, first = %first.display(), second = %second.display(), "running");

    let a = CooMatrix::load(first)?;
    let b = CooMatrix::load(second)?;
    let result = a
        .apply(operation, &b)
        .with_context(|| format!("cannot {operation} {} and {}", first.display(), second.display()))?;
    debug!(
        shape = ?result.dimensions(),
        nnz = result.nnz(),
        density = result.density(),
        "computed result"
    );

    if to_stdout {
        println!("{}", spmat::output::render(&result, config.format)?);
        return Ok(());
    }

    let path = write_result(config, first, second, operation, &result)?;
    println!("Result saved to {}", path.display());
    Ok(())
}

/// Ask for the operation and the two file paths
///
/// Returns `None` when the selected option is not on the menu or the
/// prompt is closed before an option is chosen.
fn prompt_inputs() -> Result<Option<(Operation, PathBuf, PathBuf)>> {
    let mut rl = DefaultEditor::new().context("Failed to initialize readline")?;

    println!("\nOperations:");
    for op in Operation::ALL {
        println!("{}. {}", op.menu_index(), capitalize(&op.to_string()));
    }

    let choice = match rl.readline("Select operation (1-3): ") {
        Ok(line) => line.trim().to_string(),
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => String::new(),
        Err(err) => return Err(err).context("failed to read operation"),
    };
    let operation = match choice.as_str() {
        "1" | "2" | "3" => choice.parse::<Operation>()?,
        _ => {
            println!("Invalid option.");
            return Ok(None);
        }
    };

    let first = ask(&mut rl, "Enter first matrix file: ")?;
    let second = ask(&mut rl, "Enter second matrix file: ")?;
    Ok(Some((operation, PathBuf::from(first), PathBuf::from(second))))
}

fn ask(rl: &mut DefaultEditor, question: &str) -> Result<String> {
    let answer = rl
        .readline(question)
        .with_context(|| format!("no answer to \"{}\"", question.trim_end()))?;
    Ok(answer.trim().to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
