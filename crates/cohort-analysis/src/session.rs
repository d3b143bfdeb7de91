//! Application session state
//!
//! The record set is the single owned mutable resource of the whole system.
//! [`Session`] holds it together with the column schema and exposes the
//! analysis operations against whatever dataset is currently loaded. A new
//! upload replaces the record set wholesale on success and leaves it
//! untouched on failure, so a host never observes a partially-ingested
//! dataset.

use cohort_stats::correlation::CorrelationMatrix;
use cohort_table::{LoadError, RecordSet, TableSchema, loader};

use crate::{
    aggregate,
    error::AnalysisError,
    summary::{self, PerformanceSummary, SkillsSummary},
};

/// Owned application state: the active schema and the loaded record set.
///
/// # Examples
///
/// ```
/// use cohort_analysis::session::Session;
///
/// let mut session = Session::default();
/// assert!(session.chapters().is_err()); // nothing loaded yet
///
/// let csv = "\
/// Test Chapter,Test Score,Strength,Opportunity,Challenge
/// Ch1,80,Teamwork,Focus,Time
/// ";
/// session.load_csv(csv.as_bytes()).unwrap();
/// assert_eq!(session.chapters().unwrap(), vec!["Ch1".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    schema: TableSchema,
    records: Option<RecordSet>,
}

impl Session {
    /// Creates a session with a custom column schema.
    #[must_use]
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            records: None,
        }
    }

    /// The active column schema.
    #[must_use]
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// The currently-loaded record set, if any.
    #[must_use]
    pub fn records(&self) -> Option<&RecordSet> {
        self.records.as_ref()
    }

    /// Loads a new dataset, replacing the current one only on success.
    ///
    /// On error the previously loaded record set (if any) stays active, so a
    /// failed upload never degrades an existing view.
    ///
    /// # Errors
    ///
    /// Propagates [`LoadError`] from the loader.
    pub fn load_csv(&mut self, bytes: &[u8]) -> Result<&RecordSet, LoadError> {
        let records = loader::load_csv(bytes, &self.schema)?;
        Ok(self.records.insert(records))
    }

    /// Distinct chapters in first-appearance order.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoData`] before the first successful load.
    pub fn chapters(&self) -> Result<Vec<String>, AnalysisError> {
        aggregate::distinct_groups(self.loaded()?, &self.schema.group_column)
    }

    /// The performance view, optionally restricted to one chapter.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoData`] before the first successful load.
    pub fn performance(&self, chapter: Option<&str>) -> Result<PerformanceSummary, AnalysisError> {
        summary::performance_summary(self.loaded()?, &self.schema, chapter)
    }

    /// The skills view, optionally restricted to one chapter.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoData`] before the first successful load.
    pub fn skills(&self, chapter: Option<&str>) -> Result<SkillsSummary, AnalysisError> {
        summary::skills_summary(self.loaded()?, &self.schema, chapter)
    }

    /// The correlation view for one chapter.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoData`] before the first successful load.
    pub fn correlation(&self, chapter: &str) -> Result<CorrelationMatrix, AnalysisError> {
        summary::correlation_summary(self.loaded()?, &self.schema, chapter)
    }

    /// The single score-vs-encoded-column coefficient for one chapter.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoData`] before the first successful load.
    pub fn pair_correlation(
        &self,
        chapter: &str,
        categorical_column: &str,
    ) -> Result<f64, AnalysisError> {
        summary::pair_correlation(self.loaded()?, &self.schema, chapter, categorical_column)
    }

    fn loaded(&self) -> Result<&RecordSet, AnalysisError> {
        self.records.as_ref().ok_or(AnalysisError::NoData)
    }
}
