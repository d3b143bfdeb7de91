//! Pairwise-complete Pearson correlation
//!
//! Correlations are computed over series that may contain missing values.
//! For each pair of series, only the rows where *both* values are present
//! participate in that pair's coefficient; other pairs of the same matrix
//! still use their own complete rows.
//!
//! Degenerate cases (fewer than two complete pairs, zero variance on either
//! side) produce `NaN` rather than an error. `NaN` is a legitimate output
//! value here: a downstream table or heatmap renders it as "no data", it is
//! never thrown.

use serde::Serialize;

/// Pearson correlation coefficient between two optionally-missing series.
///
/// Rows where either side is `None` are excluded from the computation.
/// Returns `NaN` when fewer than two complete pairs remain or when either
/// side has zero variance over the complete pairs. The result is clamped to
/// `[-1, 1]` to absorb floating-point drift.
///
/// # Panics
///
/// Panics if the series have different lengths.
///
/// # Examples
///
/// ```
/// use cohort_stats::correlation::pearson;
///
/// let xs = [Some(1.0), Some(2.0), Some(3.0)];
/// let ys = [Some(6.0), Some(4.0), Some(2.0)];
/// assert!((pearson(&xs, &ys) + 1.0).abs() < 1e-12);
///
/// // A single complete pair is not enough.
/// assert!(pearson(&[Some(1.0), None], &[Some(2.0), Some(3.0)]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    assert_eq!(xs.len(), ys.len(), "series must have equal length");

    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}

/// A square, symmetric Pearson correlation matrix over labeled series.
///
/// Entries are in `[-1, 1]` or `NaN` for degenerate pairs. The diagonal is
/// exactly `1.0` for a series with nonzero variance and `NaN` for a
/// constant or near-empty series; forcing `1` there would claim a
/// correlation the data cannot support.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Builds the matrix from labeled series of equal length.
    ///
    /// Each pair of series is correlated pairwise-complete; the upper
    /// triangle is computed and mirrored, so symmetry holds exactly.
    ///
    /// # Panics
    ///
    /// Panics if the series have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_stats::correlation::CorrelationMatrix;
    ///
    /// let matrix = CorrelationMatrix::from_series(&[
    ///     ("score".to_owned(), vec![Some(1.0), Some(2.0), Some(3.0)]),
    ///     ("code".to_owned(), vec![Some(2.0), Some(4.0), Some(6.0)]),
    /// ]);
    /// assert_eq!(matrix.get(0, 0), 1.0);
    /// assert!((matrix.get(0, 1) - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_series(series: &[(String, Vec<Option<f64>>)]) -> Self {
        let size = series.len();
        let mut values = vec![vec![f64::NAN; size]; size];

        for i in 0..size {
            values[i][i] = diagonal_value(&series[i].1);
            for j in (i + 1)..size {
                let r = pearson(&series[i].1, &series[j].1);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            labels: series.iter().map(|(label, _)| label.clone()).collect(),
            values,
        }
    }

    /// Labels in matrix order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// The coefficient at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// The coefficient for a pair of labels, or `None` if either label is
    /// absent.
    #[must_use]
    pub fn get_by_label(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.values[i][j])
    }
}

/// Diagonal entry for one series: exactly `1.0` when the series has at
/// least two present values with nonzero variance, `NaN` otherwise.
fn diagonal_value(series: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = series.iter().filter_map(|v| *v).collect();
    if present.len() < 2 {
        return f64::NAN;
    }
    let first = present[0];
    if present.iter().all(|v| *v == first) {
        return f64::NAN;
    }
    1.0
}
