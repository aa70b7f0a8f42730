//! rpngrid - Evaluate a table of postfix cell expressions.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rpngrid_core::Document;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rpngrid", version)]
#[command(about = "Evaluate a comma-delimited table of postfix expressions", long_about = None)]
struct Cli {
    /// Table to evaluate, one row per line
    #[arg(required_unless_present = "command", conflicts_with = "command")]
    file: Option<PathBuf>,

    /// Evaluate a single postfix expression instead of a file
    #[arg(short = 'c', long = "command", value_name = "EXPR", allow_hyphen_values = true)]
    command: Option<String>,

    /// Write the evaluated table to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let doc = match (&cli.command, &cli.file) {
        (Some(expr), _) => Document::from_expression(expr),
        (None, Some(path)) => {
            let mut doc = Document::from_path(path)
                .with_context(|| format!("failed to load table {}", path.display()))?;
            doc.evaluate();
            doc
        }
        (None, None) => bail!("no input table given"),
    };

    match cli.output {
        Some(path) => {
            doc.save_to(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote evaluated table");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            doc.write_to(&mut stdout).context("failed to write to stdout")?;
        }
    }

    // A lone expression that fails is reported through the exit status.
    if cli.command.is_some() && doc.grid().error_count() > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
