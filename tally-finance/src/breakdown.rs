//! Per-category series behind the bar and pie views.
//!
//! These work on the raw `amount` column, not the signed one, so an expense
//! entered as a negative number shows up as a negative slice or bar.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_core::{RecordSet, TransactionRecord, TxnType};

use crate::summary::CategoryTotal;

/// One category's monthly amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub category: String,
    /// Aligned with [`MonthlyBreakdown::months`]
    pub values: Vec<f64>,
}

impl CategorySeries {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Month-by-category amounts, split by transaction type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// Every month with at least one income or expense row, ascending
    pub months: Vec<NaiveDate>,
    /// Largest category total first
    pub income: Vec<CategorySeries>,
    pub expense: Vec<CategorySeries>,
}

impl MonthlyBreakdown {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

pub fn monthly_breakdown(records: &RecordSet) -> MonthlyBreakdown {
    let months: Vec<NaiveDate> = records
        .iter()
        .filter_map(TransactionRecord::year_month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    MonthlyBreakdown {
        income: series_for(records, TxnType::Income, &months),
        expense: series_for(records, TxnType::Expense, &months),
        months,
    }
}

fn series_for(records: &RecordSet, txn_type: TxnType, months: &[NaiveDate]) -> Vec<CategorySeries> {
    let mut by_category: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for r in records.iter().filter(|r| r.txn_type == txn_type) {
        let Some(col) = r.year_month().and_then(|ym| months.binary_search(&ym).ok()) else {
            continue;
        };
        by_category
            .entry(r.category.as_str())
            .or_insert_with(|| vec![0.0; months.len()])[col] += r.amount;
    }

    let mut series: Vec<CategorySeries> = by_category
        .into_iter()
        .map(|(category, values)| CategorySeries {
            category: category.to_string(),
            values,
        })
        .collect();
    series.sort_by(|a, b| b.total().total_cmp(&a.total()));
    series
}

/// Expense amount per category, largest first
pub fn expense_share(records: &RecordSet) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records.iter().filter(|r| r.is_expense()) {
        *sums.entry(r.category.as_str()).or_insert(0.0) += r.amount;
    }

    let mut shares: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    shares.sort_by(|a, b| b.total.total_cmp(&a.total));
    shares
}
