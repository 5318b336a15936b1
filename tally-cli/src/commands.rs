use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use tally_core::{Filter, FilterOptions};
use tally_finance::{
    Dashboard, DashboardReport, LoadFailure, Selection, load_paths, write_csv, write_csv_path,
};

use crate::InputArgs;
use crate::config::Config;
use crate::render::{self, ChartKind};

const NO_DATA: &str = "No data loaded yet. Pass one or more CSV files.";
const NO_MATCHES: &str = "No transactions found for selected filters";

/// Load every file, report the ones that failed, and run the pipeline on the rest.
fn run(input: &InputArgs, top_n: usize) -> (Dashboard, Vec<LoadFailure>) {
    let loaded = load_paths(&input.files);
    if !loaded.failures.is_empty() {
        let msgs: Vec<String> = loaded.failures.iter().map(ToString::to_string).collect();
        eprintln!("Some files could not be read: {}", msgs.join("; "));
    }

    let selection = Selection {
        years: input.years.clone(),
        categories: input.categories.clone(),
        accounts: input.accounts.clone(),
    };
    let dash = Dashboard::run(&loaded.sets, &selection, top_n);
    (dash, loaded.failures)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    failures: Vec<String>,
    options: &'a FilterOptions,
    filter: &'a Filter,
    records: usize,
    report: &'a DashboardReport,
}

pub fn cmd_report(
    cfg: &Config,
    input: &InputArgs,
    chart: Option<ChartKind>,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let top_n = top.unwrap_or(cfg.display.top_n);
    let chart = chart.unwrap_or(cfg.display.chart);
    let sym = cfg.display.currency_symbol.as_str();

    let (dash, failures) = run(input, top_n);

    if json {
        let out = JsonReport {
            failures: failures.iter().map(ToString::to_string).collect(),
            options: &dash.options,
            filter: &dash.filter,
            records: dash.filtered.len(),
            report: &dash.report,
        };
        println!("{}", serde_json::to_string_pretty(&out).context("serialize report")?);
        return Ok(());
    }

    if dash.no_data() {
        println!("{NO_DATA}");
        return Ok(());
    }

    info!(records = dash.filtered.len(), chart = ?chart, "rendering report");

    if dash.report.has_data() {
        println!("{}\n", render::chart(chart, &dash.report, sym));
    } else {
        println!("{NO_MATCHES}\n");
    }

    if !dash.report.pivot.is_empty() {
        println!("{}\n", render::pivot(&dash.report.pivot, sym));
    }
    println!("{}\n", render::summary(&dash.report.summary, sym));
    println!("{}", render::top_categories(&dash.report.top_categories, sym));

    Ok(())
}

pub fn cmd_export(cfg: &Config, input: &InputArgs, out: Option<PathBuf>) -> Result<()> {
    let (dash, _) = run(input, cfg.display.top_n);
    let out = out.unwrap_or_else(|| PathBuf::from(&cfg.export.file_name));

    if out == Path::new("-") {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_csv(&dash.filtered, &mut lock).context("write export to stdout")?;
        lock.flush()?;
        return Ok(());
    }

    write_csv_path(&dash.filtered, &out).with_context(|| format!("write {}", out.display()))?;
    eprintln!("Wrote {} records to {}", dash.filtered.len(), out.display());
    Ok(())
}

pub fn cmd_options(files: &[PathBuf]) -> Result<()> {
    let input = InputArgs {
        files: files.to_vec(),
        years: Vec::new(),
        categories: Vec::new(),
        accounts: Vec::new(),
    };
    let (dash, _) = run(&input, 0);

    if dash.no_data() {
        println!("{NO_DATA}");
        return Ok(());
    }
    println!("{}", render::options(&dash.options));
    Ok(())
}
