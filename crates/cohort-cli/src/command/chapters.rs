//! Chapter listing command

use clap::Args;

use crate::command::DatasetArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct ChaptersArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Emit JSON instead of a text listing
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &ChaptersArg) -> anyhow::Result<()> {
    let session = arg.dataset.load()?;
    let chapters = session.chapters()?;

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&chapters)?);
        return Ok(());
    }

    println!("Chapters ({}):", chapters.len());
    for chapter in &chapters {
        println!("  {chapter}");
    }
    Ok(())
}
