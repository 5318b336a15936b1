//! CSV export of a (filtered) record set, derived columns included.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use tally_core::{RecordSet, Result, TransactionRecord};

/// File name offered for the export when the caller has no preference
pub const DEFAULT_EXPORT_FILE: &str = "filtered_financials.csv";

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Account")]
    account: &'a str,
    #[serde(rename = "Type")]
    txn_type: &'static str,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Year")]
    year: Option<i32>,
    #[serde(rename = "Month")]
    month: Option<u32>,
    #[serde(rename = "SignedAmount")]
    signed_amount: f64,
}

impl<'a> From<&'a TransactionRecord> for ExportRow<'a> {
    fn from(r: &'a TransactionRecord) -> Self {
        Self {
            date: r.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            category: &r.category,
            account: &r.account,
            txn_type: r.txn_type.as_str(),
            amount: r.amount,
            year: r.year,
            month: r.month,
            signed_amount: r.signed_amount,
        }
    }
}

/// Write `records` as comma-separated UTF-8 with a header row.
///
/// The header is written even when there are no records.
pub fn write_csv<W: Write>(records: &RecordSet, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record([
        "Date",
        "Category",
        "Account",
        "Type",
        "Amount",
        "Year",
        "Month",
        "SignedAmount",
    ])?;
    for r in records {
        wtr.serialize(ExportRow::from(r))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the export into memory.
pub fn to_csv_bytes(records: &RecordSet) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

pub fn write_csv_path(records: &RecordSet, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(records, file)?;
    info!(path = %path.as_ref().display(), rows = records.len(), "wrote export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::TxnType;

    #[test]
    fn test_export_includes_derived_columns() {
        let records = RecordSet::new(vec![
            TransactionRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 5),
                "Food, Dining",
                "Checking",
                TxnType::Expense,
                50.0,
            ),
            TransactionRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 20),
                "Salary",
                "Checking",
                TxnType::Income,
                2000.5,
            ),
        ]);

        let text = String::from_utf8(to_csv_bytes(&records).unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Date,Category,Account,Type,Amount,Year,Month,SignedAmount");
        assert_eq!(lines[1], "2024-01-05,\"Food, Dining\",Checking,Expense,50.0,2024,1,-50.0");
        assert_eq!(lines[2], "2024-01-20,Salary,Checking,Income,2000.5,2024,1,2000.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_of_empty_set_is_header_only() {
        let text = String::from_utf8(to_csv_bytes(&RecordSet::empty()).unwrap()).unwrap();
        assert_eq!(text, "Date,Category,Account,Type,Amount,Year,Month,SignedAmount\n");
    }
}
