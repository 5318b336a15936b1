//! Monthly income / expense / net totals.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_core::RecordSet;

/// Totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// First day of the month
    pub year_month: NaiveDate,
    pub income: f64,
    /// Positive magnitude of the month's outflows
    pub expense: f64,
    pub net: f64,
}

impl MonthlyTotals {
    fn empty(year_month: NaiveDate) -> Self {
        Self {
            year_month,
            income: 0.0,
            expense: 0.0,
            net: 0.0,
        }
    }

    /// Month label like "2024-01"
    pub fn label(&self) -> String {
        self.year_month.format("%Y-%m").to_string()
    }
}

/// One row per month that has at least one dated record, ascending.
///
/// Months with no records are not filled in. Undated records are skipped.
pub fn aggregate_monthly(records: &RecordSet) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<NaiveDate, MonthlyTotals> = BTreeMap::new();

    for r in records {
        let Some(ym) = r.year_month() else {
            continue;
        };
        let acc = months.entry(ym).or_insert_with(|| MonthlyTotals::empty(ym));
        if r.signed_amount > 0.0 {
            acc.income += r.signed_amount;
        } else if r.signed_amount < 0.0 {
            acc.expense -= r.signed_amount;
        }
        acc.net += r.signed_amount;
    }

    months.into_values().collect()
}
