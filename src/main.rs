use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::parser::MatchesError;
use clap::{Arg, Command};
use thiserror::Error;

use crate::config::{CatalogConfig, ConfigError};
use crate::store::AlbumStore;

mod config;
mod models;
mod responses;
mod routes;
mod server;
mod store;

#[derive(Debug)]
struct Args {
    config_path: Option<String>,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("Argument error: {0}")]
    Cli(#[from] clap::Error),
    #[error("Argument error: {0}")]
    Args(#[from] MatchesError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Server error: {0}")]
    Server(#[from] rocket::Error),
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("JSON file with optional `address` and `port`")
                .required(false),
        )
}

fn parse_cli_args<I, T>(argv: I) -> Result<Args, StartupError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = match command().try_get_matches_from(argv) {
        Ok(cmd) => cmd,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(err.into()),
    };

    let args = Args {
        config_path: cmd.try_get_one::<String>("config")?.cloned(),
    };
    Ok(args)
}

async fn run() -> Result<(), StartupError> {
    let args = parse_cli_args(std::env::args_os())?;

    let config = match args.config_path {
        Some(path) => {
            tracing::info!("Loading config from {}", path);
            CatalogConfig::load(path)?
        }
        None => CatalogConfig::default(),
    };
    tracing::debug!("Effective config: {:?}", config);

    let store = AlbumStore::seeded();
    tracing::info!(
        "Serving {} albums on http://{}:{}",
        store.count(),
        config.address,
        config.port
    );

    let _rocket = server::build(&config, store).launch().await?;
    tracing::info!("Server stopped");
    Ok(())
}

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
