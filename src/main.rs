use clap::Parser;
use nutristats::structs::cli::Cli;
use nutristats::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    CommandRunner::run_command(cli).await?;
    Ok(())
}
