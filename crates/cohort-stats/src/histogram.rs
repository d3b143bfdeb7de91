//! Equal-width histograms for score distributions

use std::ops::Range;

use serde::Serialize;

/// A histogram representation of a score distribution.
///
/// The data range `[min, max]` is divided into equal-width bins and each
/// value is counted into the bin covering it. The last bin is closed at the
/// top so the maximum value is always counted.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive
    /// end, except the last bin which includes its end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates an equal-width histogram from unsorted values.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to bin.
    /// * `num_bins` - Number of bins. Zero bins or an empty series yields an
    ///   empty histogram.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cohort_stats::histogram::Histogram;
    /// let histogram = Histogram::new([1.0, 2.0, 3.0, 4.0, 5.0], 2);
    /// assert_eq!(histogram.bins.len(), 2);
    /// assert_eq!(histogram.total_count(), 5);
    /// ```
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Degenerate range: all values identical. Give the single point a
        // unit-wide bin so the count still renders.
        let width = if (max - min).abs() < f64::EPSILON {
            1.0
        } else {
            (max - min) / num_bins as f64
        };

        let mut bins: Vec<HistogramBin> = (0..num_bins)
            .map(|idx| HistogramBin {
                range: (min + idx as f64 * width)..(min + (idx + 1) as f64 * width),
                count: 0,
            })
            .collect();

        for &value in &values {
            let position = ((value - min) / width).floor() as usize;
            // The maximum lands exactly on the top edge; fold it into the
            // last bin.
            let idx = position.min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}
