//! Correlation matrix command
//!
//! Renders the per-chapter Pearson matrix as a labeled grid. Undefined
//! entries (single-row chapters, zero-variance series) print as `-`.

use anyhow::Context;
use clap::Args;
use cohort_stats::correlation::CorrelationMatrix;

use crate::{command::DatasetArg, render::format_value};

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelationArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Chapter to correlate within (encoding is scoped to this subset)
    #[arg(long)]
    pub chapter: String,

    /// Also print the single coefficient between the score and this
    /// categorical column
    #[arg(long)]
    pub column: Option<String>,

    /// Emit JSON instead of a text grid
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let session = arg.dataset.load()?;
    let matrix = session.correlation(&arg.chapter)?;

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    println!("Correlation matrix for '{}':", arg.chapter);
    print_matrix(&matrix);

    if let Some(column) = &arg.column {
        let r = session
            .pair_correlation(&arg.chapter, column)
            .with_context(|| format!("cannot correlate with column '{column}'"))?;
        println!();
        println!(
            "Correlation between '{column}' and '{}' for '{}': {}",
            arg.dataset.score_column,
            arg.chapter,
            format_value(r)
        );
    }
    Ok(())
}

fn print_matrix(matrix: &CorrelationMatrix) {
    let label_width = matrix
        .labels()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(8);

    print!("  {:<label_width$}", "");
    for label in matrix.labels() {
        print!(" {label:>label_width$}");
    }
    println!();

    for (row, label) in matrix.labels().iter().enumerate() {
        print!("  {label:<label_width$}");
        for col in 0..matrix.size() {
            print!(" {:>label_width$}", format_value(matrix.get(row, col)));
        }
        println!();
    }
}
