//! Column-name configuration
//!
//! The exact column names are a property of the uploaded file, not of the
//! analysis logic, so they are carried as configuration. The defaults match
//! the student test-record domain this project ships for.

use serde::{Deserialize, Serialize};

/// Names of the columns an analysis operates on.
///
/// # Examples
///
/// ```
/// use cohort_table::TableSchema;
///
/// let schema = TableSchema::default();
/// assert_eq!(schema.score_column, "Test Score");
/// assert_eq!(schema.group_column, "Test Chapter");
/// assert_eq!(schema.categorical_columns.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableSchema {
    /// The single numeric column; coerced at load time.
    pub score_column: String,
    /// The grouping key used for chapter filtering and per-group means.
    pub group_column: String,
    /// Qualitative tag columns fed to the categorical encoder.
    pub categorical_columns: Vec<String>,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            score_column: "Test Score".to_owned(),
            group_column: "Test Chapter".to_owned(),
            categorical_columns: vec![
                "Strength".to_owned(),
                "Opportunity".to_owned(),
                "Challenge".to_owned(),
            ],
        }
    }
}

impl TableSchema {
    /// All column names the schema requires, in declaration order.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.score_column.as_str())
            .chain(std::iter::once(self.group_column.as_str()))
            .chain(self.categorical_columns.iter().map(String::as_str))
    }

    /// First required column absent from `headers`, if any.
    #[must_use]
    pub fn missing_column(&self, headers: &[String]) -> Option<&str> {
        self.required_columns()
            .find(|required| !headers.iter().any(|h| h == required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_matches_domain_columns() {
        let schema = TableSchema::default();
        let required: Vec<_> = schema.required_columns().collect();
        assert_eq!(
            required,
            vec![
                "Test Score",
                "Test Chapter",
                "Strength",
                "Opportunity",
                "Challenge"
            ]
        );
    }

    #[test]
    fn missing_column_reports_first_absent() {
        let schema = TableSchema::default();
        let headers = vec![
            "Test Chapter".to_owned(),
            "Test Score".to_owned(),
            "Strength".to_owned(),
            "Opportunity".to_owned(),
        ];
        assert_eq!(schema.missing_column(&headers), Some("Challenge"));
    }

    #[test]
    fn complete_headers_have_no_missing_column() {
        let schema = TableSchema::default();
        let headers: Vec<String> = schema.required_columns().map(str::to_owned).collect();
        assert_eq!(schema.missing_column(&headers), None);
    }
}
