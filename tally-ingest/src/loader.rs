//! Loader: one raw table in, one normalized record set out.
//!
//! Column matching is exact except for Date, which also accepts any casing.
//! Category, Type and Amount are required; Account falls back to "Unknown".
//! Bad cells never fail the load:
//!   unparseable date  -> None (the combiner drops the row later)
//!   unknown type      -> Expense
//!   unparseable amount -> 0

use std::io::Read;
use std::path::Path;

use tracing::debug;

use tally_core::{RecordSet, Result, SchemaError, TransactionRecord, TxnType};

use crate::coerce::{parse_amount, parse_date};
use crate::types::RawTable;

/// Account used when the table has no Account column
pub const DEFAULT_ACCOUNT: &str = "Unknown";

/// How many cells fell back to a default during one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows: usize,
    pub undated: usize,
    pub unrecognized_types: usize,
    pub zeroed_amounts: usize,
}

struct Columns {
    date: usize,
    category: usize,
    account: Option<usize>,
    txn_type: usize,
    amount: usize,
}

impl Columns {
    fn resolve(table: &RawTable) -> std::result::Result<Self, SchemaError> {
        let required = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };

        let date = table
            .column("Date")
            .or_else(|| table.column_ignore_case("Date"))
            .ok_or_else(|| SchemaError::MissingColumn("Date".to_string()))?;

        Ok(Self {
            date,
            category: required("Category")?,
            account: table.column("Account"),
            txn_type: required("Type")?,
            amount: required("Amount")?,
        })
    }
}

/// Normalize a raw table into typed records.
pub fn load_table(table: &RawTable) -> std::result::Result<RecordSet, SchemaError> {
    load_table_with_stats(table).map(|(records, _)| records)
}

/// Same as [`load_table`], also reporting how much was coerced.
pub fn load_table_with_stats(
    table: &RawTable,
) -> std::result::Result<(RecordSet, LoadStats), SchemaError> {
    let cols = Columns::resolve(table)?;
    let mut stats = LoadStats::default();

    let records: RecordSet = (0..table.row_count())
        .map(|row| {
            let date = parse_date(table.cell(row, cols.date));
            if date.is_none() {
                stats.undated += 1;
            }

            let raw_type = table.cell(row, cols.txn_type);
            if !TxnType::is_recognized(raw_type) {
                stats.unrecognized_types += 1;
            }

            let amount = parse_amount(table.cell(row, cols.amount)).unwrap_or_else(|| {
                stats.zeroed_amounts += 1;
                0.0
            });

            let account = match cols.account {
                Some(col) => table.cell(row, col),
                None => DEFAULT_ACCOUNT,
            };

            TransactionRecord::new(
                date,
                table.cell(row, cols.category).trim(),
                account.trim(),
                TxnType::normalize(raw_type),
                amount,
            )
        })
        .collect();

    stats.rows = records.len();
    debug!(
        rows = stats.rows,
        undated = stats.undated,
        unrecognized_types = stats.unrecognized_types,
        zeroed_amounts = stats.zeroed_amounts,
        "loaded table"
    );

    Ok((records, stats))
}

/// Parse CSV text and normalize it.
pub fn load_csv<R: Read>(reader: R) -> Result<RecordSet> {
    let table = RawTable::from_reader(reader)?;
    Ok(load_table(&table)?)
}

pub fn load_csv_path(path: impl AsRef<Path>) -> Result<RecordSet> {
    let table = RawTable::from_path(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "read table");
    Ok(load_table(&table)?)
}
