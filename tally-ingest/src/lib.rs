//! tally-ingest: read transaction CSVs, normalize them, and merge them into one ordered set.

pub mod coerce;
pub mod combiner;
pub mod loader;
pub mod types;

pub use combiner::combine;
pub use loader::{DEFAULT_ACCOUNT, LoadStats, load_csv, load_csv_path, load_table, load_table_with_stats};
pub use types::RawTable;
