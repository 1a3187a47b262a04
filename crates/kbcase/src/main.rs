use anyhow::Result;
use clap::{Parser, Subcommand};

mod export;

#[derive(Parser, Debug)]
#[command(name = "kbcase", version, about = "Case-model export tooling for the keyboard PCB")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export board data for the case model
    Export(export::ExportArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => export::execute(args),
    }
}
