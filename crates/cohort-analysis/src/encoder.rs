//! Categorical-to-integer encoding
//!
//! Each distinct text value of a categorical column receives an integer
//! code. Codes are assigned in sorted order over the distinct values of
//! exactly the row subset passed in, so re-running over a larger or smaller
//! subset may assign different integers to the same text. That scoping is
//! intentional: the correlation view encodes each chapter's rows on their
//! own, and the codes only need to be consistent within one computation.

use std::collections::BTreeMap;

use cohort_table::RecordSet;

use crate::error::AnalysisError;

/// Encodes one categorical column as integer codes, one per row.
///
/// Distinct values are taken from the cells' canonical text (missing cells
/// count as the `"missing"` category) and assigned codes `0..n` in sorted
/// order. Code equality reflects value equality; no two distinct values
/// share a code within one invocation, and the assignment is deterministic
/// for a fixed subset.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if the column does not exist.
///
/// # Examples
///
/// ```
/// use cohort_analysis::encoder::encode_column;
/// use cohort_table::{CellValue, RecordSet};
///
/// let records = RecordSet::new(
///     vec!["Strength".into()],
///     vec![
///         vec![CellValue::Text("Teamwork".into())],
///         vec![CellValue::Text("Focus".into())],
///         vec![CellValue::Text("Teamwork".into())],
///     ],
/// );
/// // Sorted distinct values: Focus = 0, Teamwork = 1.
/// assert_eq!(encode_column(&records, "Strength").unwrap(), vec![1, 0, 1]);
/// ```
#[expect(clippy::cast_possible_wrap)]
pub fn encode_column(records: &RecordSet, column: &str) -> Result<Vec<i64>, AnalysisError> {
    let texts: Vec<String> = records
        .column(column)
        .ok_or_else(|| AnalysisError::unknown_column(column))?
        .map(|cell| cell.canonical_text().into_owned())
        .collect();

    let codes: BTreeMap<&str, i64> = {
        let mut distinct: Vec<&str> = texts.iter().map(String::as_str).collect();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
            .into_iter()
            .enumerate()
            .map(|(code, text)| (text, code as i64))
            .collect()
    };

    Ok(texts.iter().map(|text| codes[text.as_str()]).collect())
}
