//! Statistical primitives for the Cohort project
//!
//! This crate provides the value-level statistics the analysis layer builds
//! on:
//!
//! - **Descriptive statistics**: summarize a numeric series (mean, median,
//!   spread)
//! - **Histogram generation**: equal-width frequency distributions
//! - **Frequency counting**: occurrence counts in descending order
//! - **Pearson correlation**: pairwise-complete coefficients and symmetric
//!   correlation matrices over series with missing values
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing score series
//! - [`histogram`]: Histogram construction for score distributions
//! - [`frequency`]: Occurrence counting for categorical values
//! - [`correlation`]: Pearson correlation over optionally-missing series
//!
//! # Examples
//!
//! ## Summarizing a score series
//!
//! ```
//! use cohort_stats::descriptive::ScoreSummary;
//!
//! let summary = ScoreSummary::new([70.0, 80.0, 90.0]).unwrap();
//! assert_eq!(summary.mean, 80.0);
//! assert_eq!(summary.count, 3);
//! ```
//!
//! ## Correlating two series with missing values
//!
//! ```
//! use cohort_stats::correlation::pearson;
//!
//! let xs = [Some(1.0), Some(2.0), None, Some(4.0)];
//! let ys = [Some(2.0), Some(4.0), Some(9.0), Some(8.0)];
//! // The third pair is skipped; the rest are perfectly linear.
//! assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod frequency;
pub mod histogram;
