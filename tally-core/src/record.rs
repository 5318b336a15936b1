//! Transaction record types shared by every stage of the pipeline

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TxnType {
    Income,
    Expense,
}

impl TxnType {
    /// Normalize a free-text type label.
    ///
    /// The label is trimmed and title-cased; only an exact `Income` or
    /// `Expense` survives. Anything else, including an empty cell, is Expense.
    pub fn normalize(raw: &str) -> Self {
        match title_case(raw.trim()).as_str() {
            "Income" => TxnType::Income,
            _ => TxnType::Expense,
        }
    }

    /// Returns true when `raw` normalizes to one of the two known labels.
    pub fn is_recognized(raw: &str) -> bool {
        matches!(title_case(raw.trim()).as_str(), "Income" | "Expense")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Income => "Income",
            TxnType::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
///
/// `"iNCOME"` becomes `"Income"`, `"pay-check"` becomes `"Pay-Check"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// A normalized transaction row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// None when the source cell could not be parsed
    pub date: Option<NaiveDate>,
    pub category: String,
    pub account: String,
    pub txn_type: TxnType,
    /// Amount as given in the source, after numeric coercion
    pub amount: f64,
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// Never negative for income, never positive for expense
    pub signed_amount: f64,
}

impl TransactionRecord {
    /// Build a record, deriving year, month and signed amount.
    pub fn new(
        date: Option<NaiveDate>,
        category: impl Into<String>,
        account: impl Into<String>,
        txn_type: TxnType,
        amount: f64,
    ) -> Self {
        // Sign comes from the type alone; a zero expense stays +0.0
        let magnitude = amount.abs();
        let signed_amount = match txn_type {
            TxnType::Income => magnitude,
            TxnType::Expense if magnitude == 0.0 => 0.0,
            TxnType::Expense => -magnitude,
        };
        Self {
            date,
            category: category.into(),
            account: account.into(),
            txn_type,
            amount,
            year: date.map(|d| d.year()),
            month: date.map(|d| d.month()),
            signed_amount,
        }
    }

    /// First day of the month containing this record's date
    pub fn year_month(&self) -> Option<NaiveDate> {
        self.date.and_then(|d| d.with_day(1))
    }

    pub fn is_income(&self) -> bool {
        self.txn_type == TxnType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.txn_type == TxnType::Expense
    }
}

/// An ordered, immutable collection of transaction records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<TransactionRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }

    /// Sum of signed amounts over every record
    pub fn signed_total(&self) -> f64 {
        self.records.iter().map(|r| r.signed_amount).sum()
    }
}

impl FromIterator<TransactionRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordSet {
    type Item = TransactionRecord;
    type IntoIter = std::vec::IntoIter<TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
