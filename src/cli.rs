use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "partquote", version, about = "Distributor part price lookup")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "partquote.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up price and availability for part numbers
    Search {
        /// Part numbers given inline
        parts: Vec<String>,

        /// Read part numbers from a .csv or .txt file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Result workbook path (defaults to output.result_file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a blank part-list input template
    Template {
        /// Template path (defaults to output.template_file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (secrets masked)
    Show,
    /// Validate the configuration file
    Validate,
}
