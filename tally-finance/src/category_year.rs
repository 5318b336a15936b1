//! Category totals per year, and the category-by-year pivot used for display.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use tally_core::RecordSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearTotal {
    pub year: i32,
    pub category: String,
    /// Sum of signed amounts
    pub total: f64,
}

/// One row per (year, category) pair present in the data. Absent pairs are
/// not emitted. Rows come out ordered by year then category, but callers
/// should not rely on any order.
pub fn aggregate_by_category_year(records: &RecordSet) -> Vec<CategoryYearTotal> {
    let mut groups: BTreeMap<(i32, &str), f64> = BTreeMap::new();

    for r in records {
        let Some(year) = r.year else {
            continue;
        };
        *groups.entry((year, r.category.as_str())).or_insert(0.0) += r.signed_amount;
    }

    groups
        .into_iter()
        .map(|((year, category), total)| CategoryYearTotal {
            year,
            category: category.to_string(),
            total,
        })
        .collect()
}

/// Category rows by year columns, missing cells filled with 0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearPivot {
    /// Column headers, ascending
    pub years: Vec<i32>,
    /// One row per category, ascending by name
    pub rows: Vec<PivotRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub category: String,
    /// Aligned with [`CategoryYearPivot::years`]
    pub totals: Vec<f64>,
}

impl CategoryYearPivot {
    pub fn from_totals(totals: &[CategoryYearTotal]) -> Self {
        let years: Vec<i32> = totals
            .iter()
            .map(|t| t.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut cells: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for t in totals {
            let Ok(col) = years.binary_search(&t.year) else {
                continue;
            };
            cells
                .entry(t.category.as_str())
                .or_insert_with(|| vec![0.0; years.len()])[col] += t.total;
        }

        let rows = cells
            .into_iter()
            .map(|(category, totals)| PivotRow {
                category: category.to_string(),
                totals,
            })
            .collect();

        Self { years, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by category name and year
    pub fn get(&self, category: &str, year: i32) -> Option<f64> {
        let col = self.years.binary_search(&year).ok()?;
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.totals[col])
    }
}
