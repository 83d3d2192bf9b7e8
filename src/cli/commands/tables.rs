use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::table::Table;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_table, colorize};
use crate::utils::table::{Column, Table as TextTable};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_store(cfg)?;
    let tables = ReportLogic::floor(&mut pool)?;
    print_floor(&tables);
    Ok(())
}

pub(crate) fn print_floor(tables: &[Table]) {
    header("Tables");

    let mut view = TextTable::new(vec![Column::right("Table"), Column::left("Status")]);
    for t in tables {
        view.add_row(vec![
            t.table_no.to_string(),
            colorize(t.status.to_db_str(), color_for_table(t.status)),
        ]);
    }
    print!("{}", view.render());

    let free = tables.iter().filter(|t| t.status.is_free()).count();
    println!("\n{} free, {} occupied", free, tables.len() - free);
}
