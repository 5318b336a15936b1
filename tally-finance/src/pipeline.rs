//! The whole run, end to end: load every input, combine, filter, aggregate.
//!
//! Nothing is cached between runs. The caller keeps the inputs and the
//! current selection and hands both in each time.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tally_core::{Error, Filter, FilterOptions, RecordSet};
use tally_ingest::{RawTable, combine, load_csv_path, load_table};

use crate::report::DashboardReport;

/// An input that could not be turned into records
#[derive(Debug)]
pub struct LoadFailure {
    pub source: String,
    pub error: Error,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// Record sets that loaded, plus the inputs that did not
#[derive(Debug, Default)]
pub struct LoadedInputs {
    pub sets: Vec<RecordSet>,
    pub failures: Vec<LoadFailure>,
}

impl LoadedInputs {
    fn push(&mut self, source: String, result: tally_core::Result<RecordSet>) {
        match result {
            Ok(set) => {
                debug!(source = %source, rows = set.len(), "loaded input");
                self.sets.push(set);
            }
            Err(error) => {
                warn!(source = %source, %error, "skipping input");
                self.failures.push(LoadFailure { source, error });
            }
        }
    }
}

/// Load each file on its own so one bad file does not block the others.
pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> LoadedInputs {
    let mut loaded = LoadedInputs::default();
    for path in paths {
        let path = path.as_ref();
        loaded.push(path.display().to_string(), load_csv_path(path));
    }
    loaded
}

/// Same as [`load_paths`] for tables already in memory.
pub fn load_tables<'a>(tables: impl IntoIterator<Item = (&'a str, &'a RawTable)>) -> LoadedInputs {
    let mut loaded = LoadedInputs::default();
    for (name, table) in tables {
        loaded.push(name.to_string(), load_table(table).map_err(Error::from));
    }
    loaded
}

/// What the user picked. An empty list means "everything available".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub years: Vec<i32>,
    pub categories: Vec<String>,
    pub accounts: Vec<String>,
}

/// Output of one run
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub combined: RecordSet,
    pub options: FilterOptions,
    pub filter: Filter,
    pub filtered: RecordSet,
    pub report: DashboardReport,
}

impl Dashboard {
    /// Combine, filter and aggregate. Never fails; empty in, empty out.
    pub fn run(sets: &[RecordSet], selection: &Selection, top_n: usize) -> Self {
        let combined = combine(sets);
        let options = FilterOptions::from_records(&combined);
        let filter = Filter::narrowed(
            &options,
            &selection.years,
            &selection.categories,
            &selection.accounts,
        );
        let filtered = filter.apply(&combined);
        debug!(
            combined = combined.len(),
            filtered = filtered.len(),
            "applied filters"
        );
        let report = DashboardReport::build(&filtered, top_n);

        Self {
            combined,
            options,
            filter,
            filtered,
            report,
        }
    }

    /// True when no input produced a dated record
    pub fn no_data(&self) -> bool {
        self.combined.is_empty()
    }
}
