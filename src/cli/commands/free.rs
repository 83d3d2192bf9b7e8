use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{OrderLogic, OrderSession};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Free { table, yes } = cmd {
        let mut session = OrderSession::from_arg(*table);
        let table_no = session.table()?;

        if !*yes
            && !confirm(format!(
                "Are you sure you want to free Table {}? This will remove all orders.",
                table_no
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_store(cfg)?;
        let discarded = OrderLogic::free_table(&mut pool, &mut session)?;

        success(format!(
            "Table {} is free ({} unbilled lines discarded).",
            table_no, discarded
        ));
    }

    Ok(())
}
