use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use bitforge::render;

#[derive(Args)]
pub struct GenerateArgs {
    /// JSON case-table config; defaults to the built-in BaseXML table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the generated document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let table = super::load_table(args.config.as_deref())?;
    let chains = table.generate().context("generation failed")?;
    let document = render::render_document(&chains, table.width());

    match args.output {
        Some(path) => std::fs::write(&path, document)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{document}"),
    }

    Ok(())
}
