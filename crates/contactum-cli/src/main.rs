mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use contactum_core::Profile;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, convert, normalize, read, Context};
use crate::error::{exit_code_for, report_error};
use contactum_config as config;

#[derive(Debug, Parser)]
#[command(name = "contactum", version, about = "contactum CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// lenient or strict; overrides the config file
    #[arg(long, global = true)]
    profile: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Turn "name number" lines into a VCF file
    Convert(convert::ConvertArgs),
    /// List the contacts stored in a VCF file
    Read(read::ReadArgs),
    /// Print phone numbers in +880 form
    Normalize(normalize::NormalizeArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        profile,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let profile = match profile {
        Some(raw) => raw.parse::<Profile>().with_context(|| "parse --profile")?,
        None => app_config.profile,
    };
    debug!(%profile, "profile selected");

    let ctx = Context {
        json,
        profile,
        config: &app_config,
    };

    match command {
        Command::Convert(args) => convert::convert(&ctx, args),
        Command::Read(args) => read::read(&ctx, args),
        Command::Normalize(args) => normalize::normalize(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before config load")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
