//! Combiner: merge loaded record sets into one dated, date-ordered set.

use tracing::debug;

use tally_core::RecordSet;

/// Concatenate `sets` in order, drop undated rows, then stable-sort by date.
///
/// The inputs are left untouched. An empty slice gives an empty set.
pub fn combine(sets: &[RecordSet]) -> RecordSet {
    let total: usize = sets.iter().map(RecordSet::len).sum();

    let mut records: Vec<_> = sets
        .iter()
        .flat_map(RecordSet::iter)
        .filter(|r| r.date.is_some())
        .cloned()
        .collect();

    // Vec::sort_by_key is stable, so same-day rows keep their source order
    records.sort_by_key(|r| r.date);

    debug!(
        inputs = sets.len(),
        kept = records.len(),
        dropped_undated = total - records.len(),
        "combined record sets"
    );

    RecordSet::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{TransactionRecord, TxnType};

    fn rec(date: Option<(i32, u32, u32)>, category: &str, amount: f64) -> TransactionRecord {
        TransactionRecord::new(
            date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            category,
            "Checking",
            TxnType::Expense,
            amount,
        )
    }

    #[test]
    fn test_empty_input_gives_empty_set() {
        assert!(combine(&[]).is_empty());
        assert!(combine(&[RecordSet::empty(), RecordSet::empty()]).is_empty());
    }

    #[test]
    fn test_drops_undated_and_sorts() {
        let a = RecordSet::new(vec![
            rec(Some((2024, 3, 1)), "Rent", 900.0),
            rec(None, "Mystery", 1.0),
            rec(Some((2024, 1, 10)), "Food", 20.0),
        ]);
        let b = RecordSet::new(vec![rec(Some((2024, 2, 14)), "Gifts", 60.0)]);

        let combined = combine(&[a.clone(), b]);
        let categories: Vec<_> = combined.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Gifts", "Rent"]);
        assert!(combined.iter().all(|r| r.date.is_some()));

        // inputs are not mutated
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let a = RecordSet::new(vec![
            rec(Some((2024, 1, 1)), "first", 1.0),
            rec(Some((2024, 1, 1)), "second", 2.0),
        ]);
        let b = RecordSet::new(vec![rec(Some((2024, 1, 1)), "third", 3.0)]);

        let combined = combine(&[a, b]);
        let categories: Vec<_> = combined.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_order_of_inputs_does_not_change_contents() {
        let a = RecordSet::new(vec![
            rec(Some((2024, 5, 1)), "Food", 10.0),
            rec(Some((2023, 12, 31)), "Rent", 800.0),
        ]);
        let b = RecordSet::new(vec![
            rec(Some((2024, 1, 15)), "Travel", 300.0),
            rec(None, "Junk", 5.0),
        ]);

        let ab = combine(&[a.clone(), b.clone()]);
        let ba = combine(&[b, a]);

        let mut left: Vec<_> = ab.iter().map(|r| (r.date, r.category.clone())).collect();
        let mut right: Vec<_> = ba.iter().map(|r| (r.date, r.category.clone())).collect();
        left.sort();
        right.sort();
        assert_eq!(left, right);
        assert_eq!(ab.len(), 3);
    }

    #[test]
    fn test_output_is_date_ascending() {
        let a = RecordSet::new(vec![
            rec(Some((2024, 6, 1)), "a", 1.0),
            rec(Some((2022, 1, 1)), "b", 1.0),
            rec(Some((2023, 7, 4)), "c", 1.0),
        ]);
        let combined = combine(&[a]);
        assert!(combined.records().windows(2).all(|w| w[0].date <= w[1].date));
    }
}
