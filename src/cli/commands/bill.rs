use crate::cli::commands::open_store;
use crate::cli::commands::order::print_totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{OrderLogic, OrderSession};
use crate::errors::AppResult;
use crate::receipt::ReceiptGenerator;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bill { table, tax } = cmd {
        let mut pool = open_store(cfg)?;
        let mut session = OrderSession::from_arg(*table);
        let tax = tax.unwrap_or(cfg.default_tax_percent);
        let receipts = ReceiptGenerator::from_config(cfg);

        let (sale, bill) = OrderLogic::bill_table(&mut pool, &mut session, tax, &receipts)?;

        print_totals(&bill, &cfg.currency);
        println!();
        success(format!(
            "Bill printed and saved to:\n{}",
            sale.receipt_file
        ));
        success(format!("Sale {} recorded, table {} is free.", sale.id, sale.table_no));
    }

    Ok(())
}
