use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use partquote::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.command {
        cli::Commands::Search {
            parts,
            file,
            output,
        } => {
            commands::search::execute(&args.config, parts, file, output).await?;
        }
        cli::Commands::Template { output } => {
            commands::template::execute(&args.config, output)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
    }

    Ok(())
}
