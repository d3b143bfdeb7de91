//! Text rendering helpers shared by the subcommands
//!
//! Results render as fixed-width tables and `#`-bar charts. `NaN` entries
//! (degenerate means, undefined correlations) render as `-`; they are valid
//! outputs of the analysis layer, not errors.

/// Width of the widest bar in a bar chart.
pub(crate) const BAR_WIDTH: usize = 40;

/// Formats a statistic, rendering `NaN` as `-`.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_nan() {
        "-".to_owned()
    } else {
        format!("{value:.3}")
    }
}

/// A proportional `#` bar, empty for `NaN` or non-positive scale.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn bar(value: f64, max: f64) -> String {
    if value.is_nan() || max <= 0.0 {
        return String::new();
    }
    let length = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(length.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_renders_as_dash() {
        assert_eq!(format_value(f64::NAN), "-");
        assert_eq!(format_value(0.5), "0.500");
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        assert_eq!(bar(10.0, 10.0).len(), BAR_WIDTH);
        assert_eq!(bar(5.0, 10.0).len(), BAR_WIDTH / 2);
        assert!(bar(f64::NAN, 10.0).is_empty());
        assert!(bar(1.0, 0.0).is_empty());
    }
}
