//! Terminal rendering of a dashboard run. Everything here returns a String so
//! the command layer decides where it goes.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde::{Deserialize, Serialize};

use tally_core::FilterOptions;
use tally_finance::{
    CategorySeries, CategoryTotal, CategoryYearPivot, DashboardReport, MonthlyBreakdown,
    MonthlyTotals, Summary,
};

use crate::fmt::{bar, money};

const BAR_WIDTH: usize = 30;

/// How the monthly data is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Income, expense and net per month
    Line,
    /// Income and expense per month, split by category
    Bar,
    /// Income and expense per month as bars
    StackedBar,
    /// Share of expenses by category
    Pie,
}

pub fn summary(s: &Summary, sym: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Amount"]);
    table.add_row(vec![Cell::new("Total income"), Cell::new(money(s.total_income, sym))]);
    table.add_row(vec![Cell::new("Total expense"), Cell::new(money(s.total_expense, sym))]);
    table.add_row(vec![Cell::new("Net"), Cell::new(money(s.net, sym))]);
    format!("Summary\n{table}")
}

pub fn chart(kind: ChartKind, report: &DashboardReport, sym: &str) -> String {
    match kind {
        ChartKind::Line => monthly_lines(&report.monthly, sym),
        ChartKind::Bar => category_bars(&report.breakdown, sym),
        ChartKind::StackedBar => stacked_bars(&report.monthly, sym),
        ChartKind::Pie => expense_pie(&report.expense_share, sym),
    }
}

fn monthly_lines(monthly: &[MonthlyTotals], sym: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Month", "Income", "Expense", "Net"]);
    for m in monthly {
        table.add_row(vec![
            Cell::new(m.label()),
            Cell::new(money(m.income, sym)),
            Cell::new(money(m.expense, sym)),
            Cell::new(money(m.net, sym)),
        ]);
    }
    format!("Monthly Income / Expense / Net\n{table}")
}

fn stacked_bars(monthly: &[MonthlyTotals], sym: &str) -> String {
    let max = monthly
        .iter()
        .map(|m| m.income.max(m.expense))
        .fold(0.0_f64, f64::max);

    let mut table = Table::new();
    table.set_header(vec!["Month", "Income", "", "Expense", ""]);
    for m in monthly {
        table.add_row(vec![
            Cell::new(m.label()),
            Cell::new(money(m.income, sym)),
            Cell::new(bar(m.income, max, BAR_WIDTH)),
            Cell::new(money(m.expense, sym)),
            Cell::new(bar(m.expense, max, BAR_WIDTH)),
        ]);
    }
    format!("Stacked Monthly Income and Expense\n{table}")
}

fn category_bars(breakdown: &MonthlyBreakdown, sym: &str) -> String {
    let mut out = String::from("Monthly Income & Expense Breakdown by Category\n");
    for (label, series) in [("Income", &breakdown.income), ("Expense", &breakdown.expense)] {
        if series.is_empty() {
            continue;
        }
        out.push_str(&format!("{label}\n{}\n", series_table(breakdown, series, sym)));
    }
    out
}

fn series_table(breakdown: &MonthlyBreakdown, series: &[CategorySeries], sym: &str) -> Table {
    let mut header = vec!["Month".to_string()];
    header.extend(series.iter().map(|s| s.category.clone()));

    let mut table = Table::new();
    table.set_header(header);
    for (i, month) in breakdown.months.iter().enumerate() {
        let mut row = vec![Cell::new(month.format("%Y-%m"))];
        row.extend(series.iter().map(|s| Cell::new(money(s.values[i], sym))));
        table.add_row(row);
    }
    table
}

fn expense_pie(shares: &[CategoryTotal], sym: &str) -> String {
    let total: f64 = shares.iter().map(|s| s.total).sum();
    let max = shares.first().map(|s| s.total).unwrap_or(0.0);

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%", ""]);
    for s in shares {
        let pct = if total != 0.0 { s.total / total * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(&s.category),
            Cell::new(money(s.total, sym)),
            Cell::new(format!("{pct:.1}%")),
            Cell::new(bar(s.total, max, BAR_WIDTH)),
        ]);
    }
    format!("Expense Share by Category\n{table}")
}

pub fn pivot(p: &CategoryYearPivot, sym: &str) -> String {
    let mut header = vec!["Category".to_string()];
    header.extend(p.years.iter().map(|y| y.to_string()));

    let mut table = Table::new();
    table.set_header(header);
    for row in &p.rows {
        let mut cells = vec![Cell::new(&row.category)];
        cells.extend(row.totals.iter().map(|t| Cell::new(money(*t, sym))));
        table.add_row(cells);
    }
    format!("Category totals by Year\n{table}")
}

pub fn top_categories(top: &[CategoryTotal], sym: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Total"]);
    for c in top {
        table.add_row(vec![Cell::new(&c.category), Cell::new(money(c.total, sym))]);
    }
    format!("Top categories (by absolute amount)\n{table}")
}

pub fn options(o: &FilterOptions) -> String {
    let years: Vec<String> = o.years.iter().map(|y| y.to_string()).collect();
    format!(
        "Years: {}\nCategories: {}\nAccounts: {}",
        years.join(", "),
        o.categories.join(", "),
        o.accounts.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{RecordSet, TransactionRecord, TxnType};

    fn report() -> DashboardReport {
        let records = RecordSet::new(vec![
            TransactionRecord::new(NaiveDate::from_ymd_opt(2024, 1, 5), "Food", "Checking", TxnType::Expense, 50.0),
            TransactionRecord::new(NaiveDate::from_ymd_opt(2024, 1, 20), "Salary", "Checking", TxnType::Income, 2000.0),
            TransactionRecord::new(NaiveDate::from_ymd_opt(2024, 2, 1), "Food", "Checking", TxnType::Expense, 30.0),
        ]);
        DashboardReport::build(&records, 10)
    }

    #[test]
    fn test_line_chart_lists_months() {
        let out = chart(ChartKind::Line, &report(), "$");
        assert!(out.contains("2024-01"));
        assert!(out.contains("2024-02"));
        assert!(out.contains("$1,950.00"));
        assert!(out.contains("-$30.00"));
    }

    #[test]
    fn test_pie_shows_percentages() {
        let out = chart(ChartKind::Pie, &report(), "$");
        assert!(out.contains("Food"));
        assert!(out.contains("100.0%"));
    }

    #[test]
    fn test_bar_chart_has_both_sections() {
        let out = chart(ChartKind::Bar, &report(), "$");
        assert!(out.contains("Income\n"));
        assert!(out.contains("Expense\n"));
        assert!(out.contains("Salary"));
    }

    #[test]
    fn test_stacked_bar_draws_bars() {
        let out = chart(ChartKind::StackedBar, &report(), "$");
        assert!(out.contains('█'));
    }

    #[test]
    fn test_pivot_and_summary() {
        let r = report();
        let p = pivot(&r.pivot, "$");
        assert!(p.contains("2024"));
        assert!(p.contains("-$80.00"));

        let s = summary(&r.summary, "$");
        assert!(s.contains("$2,000.00"));
        assert!(s.contains("$80.00"));
    }

    #[test]
    fn test_options_listing() {
        let o = FilterOptions {
            years: vec![2023, 2024],
            categories: vec!["Food".into(), "Rent".into()],
            accounts: vec!["Unknown".into()],
        };
        assert_eq!(
            options(&o),
            "Years: 2023, 2024\nCategories: Food, Rent\nAccounts: Unknown"
        );
    }
}
