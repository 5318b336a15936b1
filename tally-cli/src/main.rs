use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, prelude::*};

mod commands;
mod config;
mod fmt;
mod render;

use render::ChartKind;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Monthly and per-category totals from transaction CSVs")]
struct Cli {
    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// CSV inputs plus the three inclusion filters. An omitted filter keeps every value.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// One or more CSV files with Date, Category, Type, Amount (Account optional)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Keep only these years (repeatable)
    #[arg(long = "year")]
    pub years: Vec<i32>,

    /// Keep only these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Keep only these accounts (repeatable)
    #[arg(long = "account")]
    pub accounts: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print summary, chart, category-by-year and top categories
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Chart to draw (default from config, else line)
        #[arg(long, value_enum)]
        chart: Option<ChartKind>,

        /// Rows in the top-categories table (default from config, else 10)
        #[arg(long)]
        top: Option<usize>,

        /// Emit the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Write the filtered records, derived columns included, as CSV
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output path, "-" for stdout (default from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the years, categories and accounts available for filtering
    Options {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    match cli.command {
        Command::Report {
            input,
            chart,
            top,
            json,
        } => {
            let cfg = config::load_config()?;
            commands::cmd_report(&cfg, &input, chart, top, json)
        }
        Command::Export { input, out } => {
            let cfg = config::load_config()?;
            commands::cmd_export(&cfg, &input, out)
        }
        Command::Options { files } => commands::cmd_options(&files),
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg)?);
                Ok(())
            }
        },
    }
}
