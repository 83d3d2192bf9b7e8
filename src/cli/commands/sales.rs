use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, money, short_path};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sales { range } = cmd {
        let mut pool = open_store(cfg)?;
        let report = ReportLogic::sales(&mut pool, range.as_deref())?;

        header(match report.bounds {
            Some((a, b)) if a == b => format!("Sales Report ({})", a),
            Some((a, b)) => format!("Sales Report ({} - {})", a, b),
            None => "Sales Report".to_string(),
        });

        if report.sales.is_empty() {
            println!("No sales recorded.");
        } else {
            let mut view = Table::new(vec![
                Column::right("Sale ID"),
                Column::right("Table"),
                Column::right("Total"),
                Column::left("Date"),
                Column::left("Receipt"),
            ]);
            for s in &report.sales {
                view.add_row(vec![
                    s.id.to_string(),
                    s.table_no.to_string(),
                    money(s.total, &cfg.currency),
                    s.date.clone(),
                    short_path(&s.receipt_file),
                ]);
            }
            print!("{}", view.render());
        }

        println!(
            "\nTotal Sales: {}",
            bold(&money(report.total, &cfg.currency))
        );
    }

    Ok(())
}
