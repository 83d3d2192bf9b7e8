//! tablepos library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (store, order lifecycle, receipts, exports).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod receipt;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Tables => cli::commands::tables::handle(cfg),
        Commands::Menu { .. } => cli::commands::menu::handle(&cli.command, cfg),
        Commands::Order { .. } => cli::commands::order::handle(&cli.command, cfg),
        Commands::Kitchen { .. } => cli::commands::kitchen::handle(&cli.command, cfg),
        Commands::Bill { .. } => cli::commands::bill::handle(&cli.command, cfg),
        Commands::Free { .. } => cli::commands::free::handle(&cli.command, cfg),
        Commands::Sales { .. } => cli::commands::sales::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    cfg.apply_overrides(cli.db.as_deref(), cli.receipts.as_deref());

    dispatch(&cli, &cfg)
}
