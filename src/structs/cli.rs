use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "nutristats")]
#[clap(about = "Food consumption analytics dashboard", long_about = None)]
pub struct Cli {
    /// Override the stats backend base URL
    #[clap(long, global = true)]
    pub api_url: Option<String>,
    #[clap(subcommand)]
    pub command: Commands,
}
