//! Performance summary command
//!
//! Prints the mean score per chapter as a table with bars, the descriptive
//! summary of the valid scores, and the score-distribution histogram.

use clap::Args;
use cohort_analysis::PerformanceSummary;

use crate::{
    command::DatasetArg,
    render::{bar, format_value},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct PerformanceArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Restrict the analysis to one chapter
    #[arg(long)]
    pub chapter: Option<String>,

    /// Emit JSON instead of text tables
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &PerformanceArg) -> anyhow::Result<()> {
    let session = arg.dataset.load()?;
    let summary = session.performance(arg.chapter.as_deref())?;

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_mean_table(&arg.dataset.group_column, &summary);
    println!();
    print_score_summary(&summary);
    println!();
    print_histogram(&summary);
    Ok(())
}

fn print_mean_table(group_column: &str, summary: &PerformanceSummary) {
    println!("Average score by {group_column}:");
    if summary.mean_by_group.is_empty() {
        println!("  (no rows)");
        return;
    }

    let max_mean = summary
        .mean_by_group
        .values()
        .copied()
        .filter(|m| !m.is_nan())
        .fold(0.0_f64, f64::max);
    for (group, mean) in &summary.mean_by_group {
        println!(
            "  {:<20} {:>10} {}",
            group,
            format_value(*mean),
            bar(*mean, max_mean)
        );
    }
}

fn print_score_summary(summary: &PerformanceSummary) {
    match &summary.score_summary {
        None => println!("No valid scores in the selection."),
        Some(stats) => {
            println!(
                "Scores: n={} min={} max={} mean={} median={} std_dev={}",
                stats.count,
                format_value(stats.min),
                format_value(stats.max),
                format_value(stats.mean),
                format_value(stats.median),
                format_value(stats.std_dev),
            );
        }
    }
}

fn print_histogram(summary: &PerformanceSummary) {
    println!("Score distribution:");
    if summary.histogram.bins.is_empty() {
        println!("  (no data)");
        return;
    }

    let max_count = summary
        .histogram
        .bins
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bin in &summary.histogram.bins {
        #[expect(clippy::cast_precision_loss)]
        let bar = bar(bin.count as f64, max_count as f64);
        println!(
            "  {:>8.1} .. {:>8.1} {:>6} {bar}",
            bin.range.start, bin.range.end, bin.count
        );
    }
}
