use std::process::ExitCode;

use clap::Parser;
use lexis_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;

use self::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine, the environment alone is enough
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    logging::init(&config.log);

    let result = match &cli.command {
        Command::Setup => commands::setup(&config).await,
        Command::Import { word } => commands::import(&config, word).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
