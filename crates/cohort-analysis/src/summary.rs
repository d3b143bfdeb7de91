//! The analysis operation surface
//!
//! One function per user-facing view, each pure: filter the record set to
//! the requested chapter (when given), reduce, and return an immutable
//! result the presentation layer renders as a table or chart.

use std::{borrow::Cow, collections::BTreeMap};

use cohort_stats::{
    correlation::{CorrelationMatrix, pearson},
    descriptive::ScoreSummary,
    histogram::Histogram,
};
use cohort_table::{CellValue, RecordSet, TableSchema};
use serde::Serialize;

use crate::{aggregate, encoder, error::AnalysisError};

/// Bin count for the score-distribution histogram.
pub const SCORE_HISTOGRAM_BINS: usize = 10;

/// Mean score per group plus the score distribution.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSummary {
    /// Mean score keyed by group value, sorted by key. `NaN` for a group
    /// whose every score is missing.
    pub mean_by_group: BTreeMap<String, f64>,
    /// Non-missing scores in row order, ready for histogram rendering.
    pub scores: Vec<f64>,
    /// Descriptive statistics of `scores`; `None` when no score is present.
    pub score_summary: Option<ScoreSummary>,
    /// Equal-width distribution of `scores` over [`SCORE_HISTOGRAM_BINS`]
    /// bins.
    pub histogram: Histogram,
}

/// One skill tag with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    /// The tag text.
    pub skill: String,
    /// How often the tag occurs across the categorical columns.
    pub count: u64,
}

/// Frequency counts over the categorical skill columns.
#[derive(Debug, Clone, Serialize)]
pub struct SkillsSummary {
    /// Counts sorted most frequent first, first-appearance stable on ties.
    pub counts: Vec<SkillCount>,
}

/// Row subset for an optional chapter filter.
///
/// `None` means "all rows"; borrowing in that case avoids copying the whole
/// record set per call.
fn chapter_subset<'a>(
    records: &'a RecordSet,
    schema: &TableSchema,
    chapter: Option<&str>,
) -> Result<Cow<'a, RecordSet>, AnalysisError> {
    match chapter {
        None => Ok(Cow::Borrowed(records)),
        Some(chapter) => records
            .filter_eq(&schema.group_column, chapter)
            .map(Cow::Owned)
            .ok_or_else(|| AnalysisError::unknown_column(&schema.group_column)),
    }
}

/// Computes the performance view: mean score per group and the score
/// distribution, optionally restricted to one chapter.
///
/// An unknown chapter simply selects zero rows, producing an empty mean map
/// and an empty histogram; that is a "no data" result, not an error.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if the schema's score or group column is
/// absent from the record set.
pub fn performance_summary(
    records: &RecordSet,
    schema: &TableSchema,
    chapter: Option<&str>,
) -> Result<PerformanceSummary, AnalysisError> {
    let subset = chapter_subset(records, schema, chapter)?;
    let mean_by_group =
        aggregate::mean_by_group(&subset, &schema.score_column, &schema.group_column)?;

    let scores: Vec<f64> = subset
        .column(&schema.score_column)
        .ok_or_else(|| AnalysisError::unknown_column(&schema.score_column))?
        .filter_map(CellValue::as_number)
        .collect();

    Ok(PerformanceSummary {
        mean_by_group,
        score_summary: ScoreSummary::new(scores.iter().copied()),
        histogram: Histogram::new(scores.iter().copied(), SCORE_HISTOGRAM_BINS),
        scores,
    })
}

/// Computes the skills view: frequency counts unioned across the schema's
/// categorical columns, optionally restricted to one chapter.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if the group column or any categorical
/// column is absent.
pub fn skills_summary(
    records: &RecordSet,
    schema: &TableSchema,
    chapter: Option<&str>,
) -> Result<SkillsSummary, AnalysisError> {
    let subset = chapter_subset(records, schema, chapter)?;
    let counts = aggregate::frequency(&subset, &schema.categorical_columns)?
        .into_iter()
        .map(|(skill, count)| SkillCount { skill, count })
        .collect();
    Ok(SkillsSummary { counts })
}

/// Computes the correlation view for one chapter.
///
/// The chapter's rows are selected first, the categorical columns are
/// encoded over that subset only, and a pairwise-complete Pearson matrix is
/// computed over the score column and the encoded columns. Encoded series
/// are labeled `<column>_encoded`.
///
/// A chapter with fewer than two rows (including an unknown chapter, which
/// selects zero) yields a matrix of `NaN` entries rather than an error.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if any schema column is absent.
///
/// # Examples
///
/// ```
/// use cohort_analysis::summary::correlation_summary;
/// use cohort_table::{TableSchema, loader};
///
/// let csv = "\
/// Test Chapter,Test Score,Strength,Opportunity,Challenge
/// Ch1,80,Teamwork,Focus,Time
/// Ch1,60,Listening,Planning,Patience
/// Ch1,70,Teamwork,Focus,Time
/// ";
/// let schema = TableSchema::default();
/// let records = loader::load_csv(csv.as_bytes(), &schema).unwrap();
///
/// let matrix = correlation_summary(&records, &schema, "Ch1").unwrap();
/// assert_eq!(matrix.labels()[0], "Test Score");
/// assert_eq!(matrix.labels()[1], "Strength_encoded");
/// ```
pub fn correlation_summary(
    records: &RecordSet,
    schema: &TableSchema,
    chapter: &str,
) -> Result<CorrelationMatrix, AnalysisError> {
    let subset = chapter_subset(records, schema, Some(chapter))?;
    let series = correlation_series(&subset, schema)?;
    Ok(CorrelationMatrix::from_series(&series))
}

/// The single coefficient between the score and one encoded categorical
/// column, for one chapter.
///
/// # Errors
///
/// [`AnalysisError::UnknownColumn`] if the named column is not one the
/// record set has.
pub fn pair_correlation(
    records: &RecordSet,
    schema: &TableSchema,
    chapter: &str,
    categorical_column: &str,
) -> Result<f64, AnalysisError> {
    let subset = chapter_subset(records, schema, Some(chapter))?;
    let scores = score_series(&subset, schema)?;
    let codes = encoded_series(&subset, categorical_column)?;
    Ok(pearson(&scores, &codes))
}

fn score_series(
    records: &RecordSet,
    schema: &TableSchema,
) -> Result<Vec<Option<f64>>, AnalysisError> {
    Ok(records
        .column(&schema.score_column)
        .ok_or_else(|| AnalysisError::unknown_column(&schema.score_column))?
        .map(CellValue::as_number)
        .collect())
}

#[expect(clippy::cast_precision_loss)]
fn encoded_series(records: &RecordSet, column: &str) -> Result<Vec<Option<f64>>, AnalysisError> {
    Ok(encoder::encode_column(records, column)?
        .into_iter()
        .map(|code| Some(code as f64))
        .collect())
}

fn correlation_series(
    records: &RecordSet,
    schema: &TableSchema,
) -> Result<Vec<(String, Vec<Option<f64>>)>, AnalysisError> {
    let mut series = Vec::with_capacity(1 + schema.categorical_columns.len());
    series.push((schema.score_column.clone(), score_series(records, schema)?));
    for column in &schema.categorical_columns {
        series.push((format!("{column}_encoded"), encoded_series(records, column)?));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use cohort_table::loader;

    use super::*;

    const CSV: &str = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus,Time
Ch1,bad,Teamwork,Focus,Time
Ch2,90,Listening,Planning,Patience
";

    fn load() -> (RecordSet, TableSchema) {
        let schema = TableSchema::default();
        let records = loader::load_csv(CSV.as_bytes(), &schema).unwrap();
        (records, schema)
    }

    #[test]
    fn performance_excludes_missing_from_the_mean() {
        let (records, schema) = load();
        let summary = performance_summary(&records, &schema, None).unwrap();
        assert_eq!(summary.mean_by_group["Ch1"], 80.0);
        assert_eq!(summary.mean_by_group["Ch2"], 90.0);
        // Two valid scores survive for the distribution.
        assert_eq!(summary.scores, vec![80.0, 90.0]);
        assert_eq!(summary.histogram.total_count(), 2);
    }

    #[test]
    fn performance_for_one_chapter_only_sees_that_chapter() {
        let (records, schema) = load();
        let summary = performance_summary(&records, &schema, Some("Ch2")).unwrap();
        assert_eq!(summary.mean_by_group.len(), 1);
        assert_eq!(summary.scores, vec![90.0]);
    }

    #[test]
    fn performance_for_unknown_chapter_is_empty_not_an_error() {
        let (records, schema) = load();
        let summary = performance_summary(&records, &schema, Some("Ch9")).unwrap();
        assert!(summary.mean_by_group.is_empty());
        assert!(summary.scores.is_empty());
        assert!(summary.score_summary.is_none());
        assert!(summary.histogram.bins.is_empty());
    }

    #[test]
    fn bad_score_row_still_counts_toward_skills() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus,Time
Ch1,bad,Teamwork,Focus,Time
";
        let schema = TableSchema::default();
        let records = loader::load_csv(csv.as_bytes(), &schema).unwrap();

        let means = aggregate::mean_by_group(&records, &schema.score_column, &schema.group_column)
            .unwrap();
        assert_eq!(means["Ch1"], 80.0);

        let summary = skills_summary(&records, &schema, None).unwrap();
        for skill in ["Teamwork", "Focus", "Time"] {
            let entry = summary.counts.iter().find(|c| c.skill == skill).unwrap();
            assert_eq!(entry.count, 2, "count for {skill}");
        }
    }

    #[test]
    fn correlation_matrix_covers_score_and_encoded_columns() {
        let (records, schema) = load();
        let matrix = correlation_summary(&records, &schema, "Ch1").unwrap();
        assert_eq!(
            matrix.labels(),
            &[
                "Test Score",
                "Strength_encoded",
                "Opportunity_encoded",
                "Challenge_encoded"
            ]
        );
    }

    #[test]
    fn single_row_chapter_yields_all_nan_matrix() {
        let (records, schema) = load();
        let matrix = correlation_summary(&records, &schema, "Ch2").unwrap();
        for i in 0..matrix.size() {
            for j in 0..matrix.size() {
                assert!(matrix.get(i, j).is_nan(), "({i}, {j}) should be NaN");
            }
        }
    }

    #[test]
    fn correlation_is_symmetric_with_real_data() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus,Time
Ch1,60,Listening,Planning,Patience
Ch1,70,Teamwork,Focus,Time
Ch1,50,Listening,Focus,Patience
";
        let schema = TableSchema::default();
        let records = loader::load_csv(csv.as_bytes(), &schema).unwrap();
        let matrix = correlation_summary(&records, &schema, "Ch1").unwrap();
        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 1.0, "diagonal at {i}");
            for j in 0..matrix.size() {
                let a = matrix.get(i, j);
                let b = matrix.get(j, i);
                assert!(a == b || (a.is_nan() && b.is_nan()));
                assert!(a.is_nan() || (-1.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn pair_correlation_matches_the_matrix_entry() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus,Time
Ch1,60,Listening,Planning,Patience
Ch1,70,Teamwork,Focus,Time
";
        let schema = TableSchema::default();
        let records = loader::load_csv(csv.as_bytes(), &schema).unwrap();

        let matrix = correlation_summary(&records, &schema, "Ch1").unwrap();
        let from_matrix = matrix
            .get_by_label("Test Score", "Strength_encoded")
            .unwrap();
        let direct = pair_correlation(&records, &schema, "Ch1", "Strength").unwrap();
        assert!((from_matrix - direct).abs() < 1e-12);
    }
}
