//! The record set: ordered rows over a shared column set
//!
//! A [`RecordSet`] is the single owned resource of an analysis session.
//! Everything derived from it (encoded columns, aggregates, correlation
//! matrices) is a plain return value with no independent lifecycle: derived
//! values are recomputed per call and never mutated in place.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// An ordered sequence of rows sharing one column set.
///
/// Column order is insertion order from the source file header. Every row has
/// exactly one cell per column; the loader enforces this at ingestion time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl RecordSet {
    /// Creates a record set from a column list and row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if any row's width differs from the column count.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        assert!(
            rows.iter().all(|row| row.len() == columns.len()),
            "every row must have one cell per column"
        );
        Self { columns, rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the record set has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in header order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Position of a column by name, or `None` if absent.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterator over one column's cells in row order, or `None` if the
    /// column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Row subset whose cells in `column` have the given canonical text.
    ///
    /// This is the chapter-filter primitive: the returned record set shares
    /// the column layout but owns copies of only the matching rows. Returns
    /// `None` if the column does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_table::{CellValue, RecordSet};
    ///
    /// let records = RecordSet::new(
    ///     vec!["Test Chapter".into(), "Test Score".into()],
    ///     vec![
    ///         vec![CellValue::Text("Ch1".into()), CellValue::Number(80.0)],
    ///         vec![CellValue::Text("Ch2".into()), CellValue::Number(60.0)],
    ///     ],
    /// );
    /// let ch1 = records.filter_eq("Test Chapter", "Ch1").unwrap();
    /// assert_eq!(ch1.len(), 1);
    /// ```
    #[must_use]
    pub fn filter_eq(&self, column: &str, value: &str) -> Option<Self> {
        let idx = self.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| row[idx].canonical_text() == value)
            .cloned()
            .collect();
        Some(Self {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Distinct canonical-text values of a column in first-appearance order.
    ///
    /// This drives selector widgets in a host UI (e.g. a chapter dropdown),
    /// so the order matches the order values first occur in the file rather
    /// than sorted order. Returns `None` if the column does not exist.
    #[must_use]
    pub fn distinct_text(&self, column: &str) -> Option<Vec<String>> {
        let idx = self.column_index(column)?;
        let mut seen = Vec::new();
        for row in &self.rows {
            let text = row[idx].canonical_text();
            if !seen.iter().any(|s| *s == text) {
                seen.push(text.into_owned());
            }
        }
        Some(seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordSet {
        RecordSet::new(
            vec!["Test Chapter".into(), "Test Score".into()],
            vec![
                vec![CellValue::Text("Ch2".into()), CellValue::Number(70.0)],
                vec![CellValue::Text("Ch1".into()), CellValue::Number(80.0)],
                vec![CellValue::Text("Ch2".into()), CellValue::Missing],
            ],
        )
    }

    #[test]
    fn column_lookup_preserves_header_order() {
        let records = sample();
        assert_eq!(records.column_index("Test Chapter"), Some(0));
        assert_eq!(records.column_index("Test Score"), Some(1));
        assert_eq!(records.column_index("Nope"), None);
    }

    #[test]
    fn filter_eq_keeps_only_matching_rows() {
        let records = sample();
        let ch2 = records.filter_eq("Test Chapter", "Ch2").unwrap();
        assert_eq!(ch2.len(), 2);
        assert_eq!(ch2.columns(), records.columns());
    }

    #[test]
    fn filter_eq_unknown_column_is_none() {
        assert!(sample().filter_eq("Nope", "x").is_none());
    }

    #[test]
    fn distinct_text_is_first_appearance_order() {
        let records = sample();
        let chapters = records.distinct_text("Test Chapter").unwrap();
        assert_eq!(chapters, vec!["Ch2".to_string(), "Ch1".to_string()]);
    }

    #[test]
    fn column_iterates_in_row_order() {
        let records = sample();
        let scores: Vec<Option<f64>> = records
            .column("Test Score")
            .unwrap()
            .map(CellValue::as_number)
            .collect();
        assert_eq!(scores, vec![Some(70.0), Some(80.0), None]);
    }

    #[test]
    #[should_panic(expected = "every row must have one cell per column")]
    fn ragged_rows_are_rejected() {
        let _ = RecordSet::new(
            vec!["A".into(), "B".into()],
            vec![vec![CellValue::Missing]],
        );
    }
}
