//! tally-finance: aggregators, summaries, export and the end-to-end pipeline run

pub mod breakdown;
pub mod category_year;
pub mod export;
pub mod monthly;
pub mod pipeline;
pub mod report;
pub mod summary;

pub use breakdown::{CategorySeries, MonthlyBreakdown, expense_share, monthly_breakdown};
pub use category_year::{CategoryYearPivot, CategoryYearTotal, PivotRow, aggregate_by_category_year};
pub use export::{DEFAULT_EXPORT_FILE, to_csv_bytes, write_csv, write_csv_path};
pub use monthly::{MonthlyTotals, aggregate_monthly};
pub use pipeline::{Dashboard, LoadFailure, LoadedInputs, Selection, load_paths, load_tables};
pub use report::DashboardReport;
pub use summary::{CategoryTotal, DEFAULT_TOP_N, Summary, top_categories};
