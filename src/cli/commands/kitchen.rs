use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, KitchenAction};
use crate::config::Config;
use crate::core::OrderLogic;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Kitchen { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_store(cfg)?;

    match action {
        KitchenAction::List => print_queue(&mut pool, cfg)?,
        KitchenAction::Done { line } => {
            if OrderLogic::mark_prepared(&mut pool, *line)? {
                success(format!("Line {} marked prepared.", line.unwrap_or_default()));
            } else {
                warning(format!(
                    "No order line with id {}: nothing to mark.",
                    line.unwrap_or_default()
                ));
            }
            print_queue(&mut pool, cfg)?;
        }
    }

    Ok(())
}

fn print_queue(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let pending = ReportLogic::kitchen_queue(pool)?;

    header("Pending Orders");

    if pending.is_empty() {
        println!("Nothing pending.");
        return Ok(());
    }

    let mut view = Table::new(vec![
        Column::right("Order ID"),
        Column::right("Table"),
        Column::left("Item"),
        Column::right("Qty"),
        Column::right("Price"),
        Column::left("Time"),
    ]);
    for l in &pending {
        view.add_row(vec![
            l.id.to_string(),
            l.table_no.to_string(),
            l.item_name.clone(),
            l.qty.to_string(),
            money(l.price, &cfg.currency),
            l.display_time(),
        ]);
    }
    print!("{}", view.render());
    Ok(())
}
