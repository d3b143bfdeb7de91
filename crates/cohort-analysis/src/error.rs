//! Analysis error taxonomy
//!
//! Only genuinely unanswerable requests become errors. Degenerate statistics
//! (a `NaN` correlation, a `NaN` group mean, an empty histogram) flow through
//! as ordinary values so a table or chart can render "no data" instead of
//! crashing.

/// Error raised by an analysis operation.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    /// No dataset has been loaded into the session yet.
    #[display("no dataset loaded; upload a CSV file first")]
    NoData,
    /// An operation referenced a column the record set does not have.
    #[display("unknown column '{column}'")]
    UnknownColumn {
        /// Name of the absent column.
        column: String,
    },
}

impl AnalysisError {
    /// Convenience constructor for the unknown-column case.
    #[must_use]
    pub fn unknown_column(column: &str) -> Self {
        AnalysisError::UnknownColumn {
            column: column.to_owned(),
        }
    }
}
