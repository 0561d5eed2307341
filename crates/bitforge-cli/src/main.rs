use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bitforge")]
#[command(about = "Generate bitwise transposition code from before/after bit layouts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit the encode/decode branch chains for a case table
    Generate(cmd::generate::GenerateArgs),

    /// Validate a case table and report runs, guards, and round-trip checks
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}
