//! v4api: command line checker for federated search contract documents

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use v4api::check::{self, Checker, Severity};
use v4api::config::{self, Settings};
use v4api::{Document, DocumentKind, SortKind};

#[derive(Parser)]
#[command(name = "v4api", about = "Federated search contract checker", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and check a document, then print its canonical form
    Check {
        /// Document kind: request, response, pool-result, pool-facets,
        /// pool-identity, providers, query-filters
        kind: DocumentKind,

        /// Input file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Only report findings; do not print the document
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the sort identifiers shared by catalog pools
    SortLabels,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match config::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(cli.verbose, &Settings::default());
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    init_logging(cli.verbose, &settings);
    debug!("v4api v{}", v4api::VERSION);

    match run(cli.command, settings) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr so stdout carries only the document
fn init_logging(verbose: bool, settings: &Settings) {
    let directive = if verbose || settings.general.debug {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, mut settings: Settings) -> Result<bool> {
    match command {
        Commands::Check {
            kind,
            file,
            compact,
            strict,
            quiet,
        } => {
            if compact {
                settings.output.pretty = false;
            }
            if strict {
                settings.check.strict = true;
            }
            if quiet {
                settings.output.echo = false;
            }
            check_document(kind, file, &settings)
        }
        Commands::SortLabels => {
            for kind in SortKind::ALL {
                println!("{}", kind);
            }
            Ok(true)
        }
    }
}

fn check_document(kind: DocumentKind, file: Option<PathBuf>, settings: &Settings) -> Result<bool> {
    let text = read_input(file.as_ref())?;
    let document = Document::decode(kind, &text)?;

    let violations = Checker::new(&settings.check, &settings.pools).check(&document);
    for violation in &violations {
        match violation.severity {
            Severity::Warning => warn!("{}", violation),
            Severity::Error => error!("{}", violation),
        }
    }

    if settings.output.echo {
        println!("{}", document.encode(settings.output.pretty)?);
    }

    let failed = check::is_failure(&violations, settings.check.strict);
    info!(
        "{} document {}: {} finding(s)",
        kind,
        if failed { "failed" } else { "passed" },
        violations.len()
    );
    Ok(!failed)
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
