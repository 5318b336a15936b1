//! Headline totals and the top-categories table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tally_core::RecordSet;

/// Default length of the top-categories table
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of positive signed amounts
    pub total_income: f64,
    /// Magnitude of the sum of negative signed amounts
    pub total_expense: f64,
    /// total_income - total_expense
    pub net: f64,
}

impl Summary {
    pub fn from_records(records: &RecordSet) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for r in records {
            if r.signed_amount > 0.0 {
                total_income += r.signed_amount;
            } else if r.signed_amount < 0.0 {
                total_expense -= r.signed_amount;
            }
        }
        Self {
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }
}

/// A category with an aggregated amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Categories ranked by |sum of signed amounts|, largest first, at most `n`.
///
/// Ties are broken by category name.
pub fn top_categories(records: &RecordSet, n: usize) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.category.as_str()).or_insert(0.0) += r.signed_amount;
    }

    let mut ranked: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total: total.abs(),
        })
        .collect();

    // Stable sort over name-ordered input keeps ties alphabetical
    ranked.sort_by(|a, b| b.total.total_cmp(&a.total));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{TransactionRecord, TxnType};

    fn rec(category: &str, txn_type: TxnType, amount: f64) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            category,
            "Checking",
            txn_type,
            amount,
        )
    }

    #[test]
    fn test_summary_totals() {
        let records = RecordSet::new(vec![
            rec("Salary", TxnType::Income, 2000.0),
            rec("Food", TxnType::Expense, 50.0),
            rec("Food", TxnType::Expense, 30.0),
            rec("Gift", TxnType::Income, 100.0),
        ]);
        let s = Summary::from_records(&records);
        assert_eq!(s.total_income, 2100.0);
        assert_eq!(s.total_expense, 80.0);
        assert_eq!(s.net, 2020.0);
    }

    #[test]
    fn test_summary_of_nothing_is_zero() {
        assert_eq!(Summary::from_records(&RecordSet::empty()), Summary::default());
    }

    #[test]
    fn test_top_categories_by_absolute_total() {
        let records = RecordSet::new(vec![
            rec("Salary", TxnType::Income, 2000.0),
            rec("Rent", TxnType::Expense, 900.0),
            rec("Food", TxnType::Expense, 50.0),
            rec("Food", TxnType::Expense, 30.0),
            rec("Travel", TxnType::Expense, 1200.0),
        ]);
        let top = top_categories(&records, 3);
        let names: Vec<_> = top.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Salary", "Travel", "Rent"]);
        assert_eq!(top[1].total, 1200.0);
    }

    #[test]
    fn test_top_categories_ties_and_limit() {
        let records = RecordSet::new(vec![
            rec("b", TxnType::Expense, 10.0),
            rec("a", TxnType::Expense, 10.0),
            rec("c", TxnType::Expense, 5.0),
        ]);
        let top = top_categories(&records, DEFAULT_TOP_N);
        let names: Vec<_> = top.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        assert_eq!(top_categories(&records, 1).len(), 1);
        assert!(top_categories(&records, 0).is_empty());
    }

    #[test]
    fn test_income_and_expense_in_one_category_net_out() {
        let records = RecordSet::new(vec![
            rec("Refunds", TxnType::Income, 40.0),
            rec("Refunds", TxnType::Expense, 100.0),
        ]);
        let top = top_categories(&records, 5);
        assert_eq!(top[0].total, 60.0);
    }
}
