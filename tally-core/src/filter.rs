//! Inclusion-list filtering over a record set.
//!
//! A record survives when its year, category and account are each members of
//! the corresponding selection. The caller owns the selection and passes it in
//! on every run; nothing here remembers a previous choice.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{RecordSet, TransactionRecord};

/// Distinct values available for filtering, each sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub categories: Vec<String>,
    pub accounts: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &RecordSet) -> Self {
        let mut years = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut accounts = BTreeSet::new();

        for r in records {
            if let Some(y) = r.year {
                years.insert(y);
            }
            categories.insert(r.category.clone());
            accounts.insert(r.account.clone());
        }

        Self {
            years: years.into_iter().collect(),
            categories: categories.into_iter().collect(),
            accounts: accounts.into_iter().collect(),
        }
    }
}

/// Three independent inclusion lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub years: BTreeSet<i32>,
    pub categories: BTreeSet<String>,
    pub accounts: BTreeSet<String>,
}

impl Filter {
    /// Select every value present in `options`
    pub fn all(options: &FilterOptions) -> Self {
        Self {
            years: options.years.iter().copied().collect(),
            categories: options.categories.iter().cloned().collect(),
            accounts: options.accounts.iter().cloned().collect(),
        }
    }

    /// Start from the full selection and narrow any list the caller supplied.
    ///
    /// An empty slice leaves that dimension at "everything".
    pub fn narrowed(
        options: &FilterOptions,
        years: &[i32],
        categories: &[String],
        accounts: &[String],
    ) -> Self {
        let mut filter = Self::all(options);
        if !years.is_empty() {
            filter.years = years.iter().copied().collect();
        }
        if !categories.is_empty() {
            filter.categories = categories.iter().cloned().collect();
        }
        if !accounts.is_empty() {
            filter.accounts = accounts.iter().cloned().collect();
        }
        filter
    }

    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_accounts<S: Into<String>>(mut self, accounts: impl IntoIterator<Item = S>) -> Self {
        self.accounts = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Records without a year never match.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        record.year.is_some_and(|y| self.years.contains(&y))
            && self.categories.contains(&record.category)
            && self.accounts.contains(&record.account)
    }

    /// Keep matching records, preserving order.
    pub fn apply(&self, records: &RecordSet) -> RecordSet {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
