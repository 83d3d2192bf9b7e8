use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Menu { category } = cmd {
        let mut pool = open_store(cfg)?;
        let items = ReportLogic::menu(&mut pool, category.as_deref())?;

        if items.is_empty() {
            warning(match category {
                Some(c) => format!("No menu items in category '{}'.", c),
                None => "The menu is empty.".to_string(),
            });
            return Ok(());
        }

        header(match category {
            Some(c) => format!("Menu ({})", c),
            None => "Menu".to_string(),
        });

        let mut view = Table::new(vec![
            Column::right("ID"),
            Column::left("Item"),
            Column::left("Category"),
            Column::right("Price"),
        ]);
        for item in &items {
            view.add_row(vec![
                item.id.to_string(),
                item.name.clone(),
                item.category.clone(),
                money(item.price, &cfg.currency),
            ]);
        }
        print!("{}", view.render());
    }

    Ok(())
}
