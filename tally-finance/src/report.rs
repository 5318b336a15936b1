//! Everything the dashboard shows for one filtered record set

use serde::Serialize;

use tally_core::RecordSet;

use crate::breakdown::{MonthlyBreakdown, expense_share, monthly_breakdown};
use crate::category_year::{CategoryYearPivot, CategoryYearTotal, aggregate_by_category_year};
use crate::monthly::{MonthlyTotals, aggregate_monthly};
use crate::summary::{CategoryTotal, Summary, top_categories};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub summary: Summary,
    pub monthly: Vec<MonthlyTotals>,
    pub category_year: Vec<CategoryYearTotal>,
    pub pivot: CategoryYearPivot,
    pub top_categories: Vec<CategoryTotal>,
    pub breakdown: MonthlyBreakdown,
    pub expense_share: Vec<CategoryTotal>,
}

impl DashboardReport {
    pub fn build(records: &RecordSet, top_n: usize) -> Self {
        let category_year = aggregate_by_category_year(records);
        let pivot = CategoryYearPivot::from_totals(&category_year);
        Self {
            summary: Summary::from_records(records),
            monthly: aggregate_monthly(records),
            category_year,
            pivot,
            top_categories: top_categories(records, top_n),
            breakdown: monthly_breakdown(records),
            expense_share: expense_share(records),
        }
    }

    /// No month to chart means nothing matched the filters.
    pub fn has_data(&self) -> bool {
        !self.monthly.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{TransactionRecord, TxnType};

    #[test]
    fn test_build_from_records() {
        let records = RecordSet::new(vec![
            TransactionRecord::new(NaiveDate::from_ymd_opt(2024, 1, 5), "Food", "Checking", TxnType::Expense, 50.0),
            TransactionRecord::new(NaiveDate::from_ymd_opt(2024, 1, 20), "Salary", "Checking", TxnType::Income, 2000.0),
        ]);
        let report = DashboardReport::build(&records, 1);
        assert!(report.has_data());
        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.summary.net, 1950.0);
        assert_eq!(report.top_categories.len(), 1);
        assert_eq!(report.top_categories[0].category, "Salary");
        assert_eq!(report.pivot.years, vec![2024]);
    }

    #[test]
    fn test_empty_report_serializes() {
        let report = DashboardReport::build(&RecordSet::empty(), 10);
        assert!(!report.has_data());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["monthly"], serde_json::json!([]));
        assert_eq!(json["summary"]["net"], 0.0);
    }
}
