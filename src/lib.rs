//! fitlog library root.
//! Exposes the CLI parser, the high-level `run()` function and the
//! aggregation, repository and configuration modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod location;
pub mod logging;
pub mod models;
pub mod repository;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::Session;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init = cli.command {
        return cli::commands::init::handle(cli);
    }
    if let Commands::Config { .. } = cli.command {
        return cli::commands::config::handle(&cli.command, cfg);
    }

    let session = Session::from_config(cfg)?;
    debug!(?session, "session ready");

    match &cli.command {
        Commands::Init | Commands::Config { .. } => Ok(()),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, &session),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, &session),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, &session),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, &session),
        Commands::Dashboard { .. } => {
            cli::commands::dashboard::handle(&cli.command, cfg, &session)
        }
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, cfg, &session),
        Commands::Goal { .. } => cli::commands::goal::handle(&cli.command, cfg, &session),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg, &session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, &session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // in test mode the user's config file is never read
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }

    logging::init(&logging::LoggingConfig::from_config(&cfg, cli.verbose));
    debug!(database = %cfg.database, backend = ?cfg.backend, "configuration loaded");

    dispatch(&cli, &cfg)
}
