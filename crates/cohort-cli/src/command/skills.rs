//! Skill frequency command

use clap::Args;

use crate::{
    command::DatasetArg,
    render::bar,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SkillsArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Restrict the analysis to one chapter
    #[arg(long)]
    pub chapter: Option<String>,

    /// Emit JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &SkillsArg) -> anyhow::Result<()> {
    let session = arg.dataset.load()?;
    let summary = session.skills(arg.chapter.as_deref())?;

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Skill frequency:");
    if summary.counts.is_empty() {
        println!("  (no rows)");
        return Ok(());
    }

    let max_count = summary.counts.iter().map(|c| c.count).max().unwrap_or(0);
    for entry in &summary.counts {
        #[expect(clippy::cast_precision_loss)]
        let bar = bar(entry.count as f64, max_count as f64);
        println!("  {:<20} {:>6} {bar}", entry.skill, entry.count);
    }
    Ok(())
}
