//! Descriptive statistics for a numeric series

use serde::Serialize;

/// Descriptive statistics summarizing a score series.
///
/// Contains common measures of central tendency and spread for a series of
/// `f64` values. Missing values are expected to be filtered out before
/// construction; the summary describes only the values actually present.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    /// Number of values in the series.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median (upper-middle element for even-length series).
    pub median: f64,
    /// The population standard deviation.
    pub std_dev: f64,
}

impl ScoreSummary {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(ScoreSummary)` - if the series contains at least one value
    /// * `None` - if the series is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use cohort_stats::descriptive::ScoreSummary;
    /// let summary = ScoreSummary::new([90.0, 70.0, 80.0]).unwrap();
    /// assert_eq!(summary.min, 70.0);
    /// assert_eq!(summary.max, 90.0);
    /// assert_eq!(summary.mean, 80.0);
    /// assert_eq!(summary.median, 80.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = sorted_values[count / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}
