mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::{FileSpec, Logger};
use monthpick::data::{AppSettings, Labels, Language, ThemeMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monthpick", about = "month calendar with date range picking")]
struct Cli {
    /// Path to the directory holding config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Color theme for this session, overriding config.yaml
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Label language for this session, overriding config.yaml
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Draw the interactive calendar without colors
    #[arg(long)]
    plain: bool,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level or flexi_logger spec; RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.yaml into the data directory
    Init,
    /// Print a month grid
    Month {
        /// Any date in the month to show (YYYY-MM-DD, default: today)
        date: Option<String>,
        /// Pick a date; repeat to build a range
        #[arg(long = "pick")]
        picks: Vec<String>,
    },
    /// Apply picks in order and print the resulting selection
    Select {
        /// Picked dates (YYYY-MM-DD)
        #[arg(required = true)]
        dates: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = build_logger(&cli)?.start()?;
    run(&cli)
}

/// Settings are only read by the commands that use them, so `init` keeps
/// working next to a broken config.yaml.
fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => {
            let settings =
                AppSettings::load_from(&cli.data_dir)?.with_overrides(cli.theme, cli.lang);
            cmd::root::run(&cli.data_dir, settings, cli.plain)
        }
        Some(Commands::Init) => cmd::init::run(&cli.data_dir),
        Some(Commands::Month { date, picks }) => {
            cmd::month::run(date.as_deref(), picks, &report_labels(cli))
        }
        Some(Commands::Select { dates, json }) => {
            cmd::select::run(dates, *json, &report_labels(cli))
        }
    }
}

/// Labels for the one-shot reports. These never write config.yaml back, so
/// an unreadable file falls back to defaults instead of failing the command.
fn report_labels(cli: &Cli) -> Labels {
    let stored = AppSettings::load_from(&cli.data_dir).unwrap_or_else(|e| {
        log::warn!("ignoring settings: {e:#}");
        AppSettings::default()
    });
    Labels::for_language(stored.with_overrides(cli.theme, cli.lang).language)
}

/// Logs go to `--log-file` when given, otherwise to stderr. The interactive
/// calendar owns the terminal, so without a file it does not log at all.
fn build_logger(cli: &Cli) -> Result<Logger> {
    let mut logger = Logger::try_with_env_or_str(&cli.log_level)?;

    if let Some(log_file) = &cli.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    } else if cli.command.is_none() {
        logger = logger.do_not_log();
    }

    Ok(logger)
}
