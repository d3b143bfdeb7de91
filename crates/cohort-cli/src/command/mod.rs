use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use cohort_analysis::Session;
use cohort_table::TableSchema;

use self::{
    chapters::ChaptersArg, correlation::CorrelationArg, performance::PerformanceArg,
    skills::SkillsArg,
};

mod chapters;
mod correlation;
mod performance;
mod skills;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List the distinct chapters in the dataset
    Chapters(#[clap(flatten)] ChaptersArg),
    /// Mean score per chapter and the score distribution
    Performance(#[clap(flatten)] PerformanceArg),
    /// Frequency of skill tags across the categorical columns
    Skills(#[clap(flatten)] SkillsArg),
    /// Pearson correlation between score and encoded skill columns
    Correlation(#[clap(flatten)] CorrelationArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Chapters(arg) => chapters::run(&arg)?,
        Mode::Performance(arg) => performance::run(&arg)?,
        Mode::Skills(arg) => skills::run(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
    }
    Ok(())
}

/// Dataset location and column-name overrides shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the CSV file of test records
    pub file: PathBuf,

    /// Name of the numeric score column
    #[arg(long, default_value = "Test Score")]
    pub score_column: String,

    /// Name of the chapter grouping column
    #[arg(long, default_value = "Test Chapter")]
    pub group_column: String,

    /// Names of the categorical skill columns (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = ["Strength", "Opportunity", "Challenge"])]
    pub categorical_columns: Vec<String>,
}

impl DatasetArg {
    fn schema(&self) -> TableSchema {
        TableSchema {
            score_column: self.score_column.clone(),
            group_column: self.group_column.clone(),
            categorical_columns: self.categorical_columns.clone(),
        }
    }

    /// Reads the file and loads it into a fresh analysis session.
    pub fn load(&self) -> anyhow::Result<Session> {
        let bytes = fs::read(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        let mut session = Session::new(self.schema());
        session
            .load_csv(&bytes)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        Ok(session)
    }
}
