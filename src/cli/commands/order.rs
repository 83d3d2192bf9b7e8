use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, OrderAction};
use crate::config::Config;
use crate::core::{OrderLogic, OrderSession};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::bill::Bill;
use crate::models::order_line::OrderLine;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{color_for_line, colorize};
use crate::utils::formatting::{bold, money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Order { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_store(cfg)?;

    match action {
        OrderAction::Show { table, tax } => {
            let session = OrderSession::from_arg(*table);
            let tax = tax.unwrap_or(cfg.default_tax_percent);
            show_table(&mut pool, &session, tax, cfg)?;
        }

        OrderAction::Add { table, item, qty } => {
            let session = OrderSession::from_arg(*table);
            let line = OrderLogic::add_item(&mut pool, &session, *item, *qty)?;
            success(format!(
                "Added {} x {} to table {} (line {})",
                line.qty, line.item_name, line.table_no, line.id
            ));
            show_table(&mut pool, &session, cfg.default_tax_percent, cfg)?;
        }

        OrderAction::Remove { line } => match OrderLogic::remove_item(&mut pool, *line)? {
            Some(removal) => {
                success(format!(
                    "Removed line {} ({} x {}) from table {}",
                    removal.line.id, removal.line.qty, removal.line.item_name, removal.line.table_no
                ));
                if removal.table_freed {
                    info(format!("Table {} has no more orders and is free.", removal.line.table_no));
                }
                let session = OrderSession::for_table(removal.line.table_no);
                show_table(&mut pool, &session, cfg.default_tax_percent, cfg)?;
            }
            None => warning(format!(
                "No order line with id {}: nothing removed.",
                line.unwrap_or_default()
            )),
        },

        OrderAction::Send { table } => {
            let session = OrderSession::from_arg(*table);
            let pending = OrderLogic::send_to_kitchen(&mut pool, &session)?;
            success(format!(
                "Orders for table {} sent to kitchen ({} pending items).",
                session.table()?,
                pending.len()
            ));
        }
    }

    Ok(())
}

/// Re-read the tab of the session's table and print it with its totals.
pub(crate) fn show_table(
    pool: &mut DbPool,
    session: &OrderSession,
    tax_percent: f64,
    cfg: &Config,
) -> AppResult<()> {
    let bill = OrderLogic::compute_bill(pool, session, tax_percent)?;
    let lines = OrderLogic::table_lines(pool, session)?;
    print_order(&bill, &lines, &cfg.currency);
    Ok(())
}

pub(crate) fn print_order(bill: &Bill, lines: &[OrderLine], currency: &str) {
    header(format!("Table {}", bill.table_no));

    if lines.is_empty() {
        println!("No orders for table {}.", bill.table_no);
        return;
    }

    let mut view = Table::new(vec![
        Column::right("ID"),
        Column::left("Item"),
        Column::right("Qty"),
        Column::right("Price"),
        Column::right("Total"),
        Column::left("Status"),
    ]);
    for l in lines {
        view.add_row(vec![
            l.id.to_string(),
            l.item_name.clone(),
            l.qty.to_string(),
            money(l.price, currency),
            money(l.line_total(), currency),
            colorize(l.status.to_db_str(), color_for_line(l.status)),
        ]);
    }
    print!("{}", view.render());

    println!();
    print_totals(bill, currency);
}

pub(crate) fn print_totals(bill: &Bill, currency: &str) {
    println!("Subtotal:      {}", money(bill.subtotal, currency));
    println!(
        "Tax ({:.1}%):    {}",
        bill.tax_percent,
        money(bill.tax, currency)
    );
    println!(
        "Grand Total:   {}",
        bold(&money(bill.grand_total, currency))
    );
}
