//! Group-wise aggregation over a record set
//!
//! Two reductions cover the tabular views: per-group means of a numeric
//! column, and frequency counts unioned across categorical columns. Both
//! are total functions over their inputs: an empty record set yields an
//! empty result, and a group with no usable numbers yields a `NaN` mean
//! rather than disappearing.

use std::collections::BTreeMap;

use cohort_stats::frequency;
use cohort_table::RecordSet;

use crate::error::AnalysisError;

/// Distinct values of a grouping column in first-appearance order.
///
/// This is what a chapter selector is populated from.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if the column does not exist.
pub fn distinct_groups(records: &RecordSet, group_column: &str) -> Result<Vec<String>, AnalysisError> {
    records
        .distinct_text(group_column)
        .ok_or_else(|| AnalysisError::unknown_column(group_column))
}

/// Arithmetic mean of `numeric_column` per distinct value of `group_column`.
///
/// Missing numeric cells are skipped inside each group's mean. A group whose
/// every value is missing still appears in the result, with a `NaN` mean:
/// the group existing is a fact about the data even when its statistic is
/// undefined. Keys are sorted; the output contains exactly the distinct
/// group values present in the input, no more and no fewer.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if either column does not exist.
///
/// # Examples
///
/// ```
/// use cohort_analysis::aggregate::mean_by_group;
/// use cohort_table::{CellValue, RecordSet};
///
/// let records = RecordSet::new(
///     vec!["Test Chapter".into(), "Test Score".into()],
///     vec![
///         vec![CellValue::Text("Ch1".into()), CellValue::Number(80.0)],
///         vec![CellValue::Text("Ch1".into()), CellValue::Missing],
///     ],
/// );
/// let means = mean_by_group(&records, "Test Score", "Test Chapter").unwrap();
/// assert_eq!(means["Ch1"], 80.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean_by_group(
    records: &RecordSet,
    numeric_column: &str,
    group_column: &str,
) -> Result<BTreeMap<String, f64>, AnalysisError> {
    let group_idx = records
        .column_index(group_column)
        .ok_or_else(|| AnalysisError::unknown_column(group_column))?;
    let numeric_idx = records
        .column_index(numeric_column)
        .ok_or_else(|| AnalysisError::unknown_column(numeric_column))?;

    let mut sums: BTreeMap<String, (f64, u64)> = BTreeMap::new();
    for row in records.rows() {
        let key = row[group_idx].canonical_text().into_owned();
        let entry = sums.entry(key).or_insert((0.0, 0));
        if let Some(value) = row[numeric_idx].as_number() {
            entry.0 += value;
            entry.1 += 1;
        }
    }

    Ok(sums
        .into_iter()
        .map(|(key, (sum, count))| {
            let mean = if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            };
            (key, mean)
        })
        .collect())
}

/// Frequency counts unioned across the given columns.
///
/// A value appearing in two different columns is one key; every cell of
/// every listed column is counted exactly once, so the total of the returned
/// counts equals `rows × columns`. Counts come back most frequent first,
/// first-appearance stable on ties.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if any listed column does not exist.
pub fn frequency(
    records: &RecordSet,
    columns: &[String],
) -> Result<Vec<(String, u64)>, AnalysisError> {
    let mut values = Vec::with_capacity(records.len() * columns.len());
    for column in columns {
        let cells = records
            .column(column)
            .ok_or_else(|| AnalysisError::unknown_column(column))?;
        values.extend(cells.map(|cell| cell.canonical_text().into_owned()));
    }
    Ok(frequency::count_values(values))
}

#[cfg(test)]
mod tests {
    use cohort_table::CellValue;

    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_owned())
    }

    fn sample() -> RecordSet {
        RecordSet::new(
            vec![
                "Test Chapter".into(),
                "Test Score".into(),
                "Strength".into(),
                "Opportunity".into(),
            ],
            vec![
                vec![text("Ch1"), CellValue::Number(80.0), text("Teamwork"), text("Focus")],
                vec![text("Ch1"), CellValue::Number(60.0), text("Focus"), text("Planning")],
                vec![text("Ch2"), CellValue::Missing, text("Teamwork"), text("Focus")],
            ],
        )
    }

    #[test]
    fn mean_keys_are_exactly_the_distinct_groups() {
        let means = mean_by_group(&sample(), "Test Score", "Test Chapter").unwrap();
        let keys: Vec<_> = means.keys().cloned().collect();
        assert_eq!(keys, vec!["Ch1".to_string(), "Ch2".to_string()]);
    }

    #[test]
    fn mean_skips_missing_values() {
        let means = mean_by_group(&sample(), "Test Score", "Test Chapter").unwrap();
        assert_eq!(means["Ch1"], 70.0);
    }

    #[test]
    fn all_missing_group_yields_nan_not_a_dropped_group() {
        let means = mean_by_group(&sample(), "Test Score", "Test Chapter").unwrap();
        assert!(means["Ch2"].is_nan());
    }

    #[test]
    fn empty_record_set_yields_empty_mean_map() {
        let empty = RecordSet::new(vec!["G".into(), "N".into()], vec![]);
        assert!(mean_by_group(&empty, "N", "G").unwrap().is_empty());
    }

    #[test]
    fn unknown_columns_are_errors() {
        let records = sample();
        assert!(mean_by_group(&records, "Nope", "Test Chapter").is_err());
        assert!(mean_by_group(&records, "Test Score", "Nope").is_err());
        assert!(frequency(&records, &["Nope".to_owned()]).is_err());
    }

    #[test]
    fn frequency_unions_values_across_columns() {
        let counts = frequency(
            &sample(),
            &["Strength".to_owned(), "Opportunity".to_owned()],
        )
        .unwrap();
        // "Focus" appears in both columns and counts as one key.
        let focus = counts.iter().find(|(v, _)| v == "Focus").unwrap();
        assert_eq!(focus.1, 3);
    }

    #[test]
    fn frequency_counts_every_cell_exactly_once() {
        let records = sample();
        let columns = ["Strength".to_owned(), "Opportunity".to_owned()];
        let counts = frequency(&records, &columns).unwrap();
        let total: u64 = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, (records.len() * columns.len()) as u64);
    }

    #[test]
    fn frequency_of_empty_records_is_empty() {
        let empty = RecordSet::new(vec!["Strength".into()], vec![]);
        assert!(frequency(&empty, &["Strength".to_owned()]).unwrap().is_empty());
    }

    #[test]
    fn distinct_groups_come_in_file_order() {
        let groups = distinct_groups(&sample(), "Test Chapter").unwrap();
        assert_eq!(groups, vec!["Ch1".to_string(), "Ch2".to_string()]);
    }
}
