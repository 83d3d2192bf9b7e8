use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = open_store(cfg)?;
        let exported = ExportLogic::export(&mut pool, *format, file, range.as_deref(), *force)?;
        if exported > 0 {
            info(format!("{} sales exported.", exported));
        }
    }
    Ok(())
}
