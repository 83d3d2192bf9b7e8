//! Table / order / bill lifecycle.
//!
//! ```text
//! free --add_item--> occupied --complete_bill | free_table | remove_item(last)--> free
//! ```
//!
//! Every multi-step mutation runs inside one SQLite transaction, so a
//! failure leaves the store exactly as it was before the call.

use crate::core::session::OrderSession;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    count_orders_for_table, delete_order_line, delete_orders_for_table, insert_order_line,
    insert_sale, load_menu_item, load_order_line, load_orders_for_table, load_table,
    mark_order_prepared, set_table_status,
};
use crate::errors::{AppError, AppResult};
use crate::models::bill::Bill;
use crate::models::order_line::OrderLine;
use crate::models::sale::Sale;
use crate::models::table::Table;
use crate::models::table_status::{LineStatus, TableStatus};
use crate::receipt::ReceiptGenerator;
use chrono::Local;
use rusqlite::Connection;
use std::fs;

pub struct OrderLogic;

fn require_table(conn: &Connection, table_no: i64) -> AppResult<Table> {
    load_table(conn, table_no)?.ok_or(AppError::UnknownTable(table_no))
}

pub fn validate_tax(tax_percent: f64) -> AppResult<f64> {
    if tax_percent.is_finite() && (0.0..=100.0).contains(&tax_percent) {
        Ok(tax_percent)
    } else {
        Err(AppError::InvalidTax(tax_percent))
    }
}

/// Result of removing an order line.
#[derive(Debug, Clone)]
pub struct Removal {
    pub line: OrderLine,
    /// The removed line was the last one of its table, which is now free.
    pub table_freed: bool,
}

impl OrderLogic {
    /// Append a pending line for `item_id` to the session's table and mark
    /// the table occupied. Repeated adds of the same item produce separate
    /// lines.
    pub fn add_item(
        pool: &mut DbPool,
        session: &OrderSession,
        item_id: Option<i64>,
        qty: i64,
    ) -> AppResult<OrderLine> {
        let table_no = session.table()?;
        let item_id = item_id.ok_or(AppError::NoMenuItemSelected)?;
        if qty < 1 {
            return Err(AppError::InvalidQuantity(qty));
        }

        pool.with_tx(|tx| {
            require_table(tx, table_no)?;
            let item = load_menu_item(tx, item_id)?.ok_or(AppError::UnknownMenuItem(item_id))?;

            let ts = Local::now().to_rfc3339();
            let id = insert_order_line(tx, table_no, &item, qty, &ts)?;
            set_table_status(tx, table_no, TableStatus::Occupied)?;

            ttlog(
                tx,
                "add",
                &format!("table {}", table_no),
                &format!("{} x {} (line {})", qty, item.name, id),
            )?;

            Ok(OrderLine {
                id,
                table_no,
                item_id: item.id,
                item_name: item.name,
                qty,
                price: item.price,
                status: LineStatus::Pending,
                timestamp: ts,
            })
        })
    }

    /// Delete one line by id, whatever table it belongs to.
    ///
    /// Returns `None` when no such line exists. When the table's tab
    /// becomes empty the table goes back to free.
    pub fn remove_item(pool: &mut DbPool, line_id: Option<i64>) -> AppResult<Option<Removal>> {
        let line_id = line_id.ok_or(AppError::NoOrderLineSelected)?;

        pool.with_tx(|tx| {
            let Some(line) = load_order_line(tx, line_id)? else {
                return Ok(None);
            };

            delete_order_line(tx, line_id)?;

            let table_freed = count_orders_for_table(tx, line.table_no)? == 0;
            if table_freed {
                set_table_status(tx, line.table_no, TableStatus::Free)?;
            }

            ttlog(
                tx,
                "remove",
                &format!("table {}", line.table_no),
                &format!("{} x {} (line {})", line.qty, line.item_name, line.id),
            )?;

            Ok(Some(Removal { line, table_freed }))
        })
    }

    /// pending → prepared. Returns false when no line has that id.
    pub fn mark_prepared(pool: &mut DbPool, line_id: Option<i64>) -> AppResult<bool> {
        let line_id = line_id.ok_or(AppError::NoOrderLineSelected)?;

        pool.with_tx(|tx| {
            let updated = mark_order_prepared(tx, line_id)?;
            if updated > 0 {
                ttlog(tx, "prepared", &format!("line {}", line_id), "Marked prepared")?;
            }
            Ok(updated > 0)
        })
    }

    /// Current tab of the session's table.
    pub fn table_lines(pool: &mut DbPool, session: &OrderSession) -> AppResult<Vec<OrderLine>> {
        let table_no = session.table()?;
        require_table(&pool.conn, table_no)?;
        Ok(load_orders_for_table(&pool.conn, table_no)?)
    }

    /// Subtotal, tax and grand total of the session's table.
    pub fn compute_bill(
        pool: &mut DbPool,
        session: &OrderSession,
        tax_percent: f64,
    ) -> AppResult<Bill> {
        let tax_percent = validate_tax(tax_percent)?;
        let table_no = session.table()?;
        let lines = Self::table_lines(pool, session)?;
        Ok(Bill::from_lines(table_no, &lines, tax_percent))
    }

    /// Record the sale, clear the tab and free the table, atomically.
    pub fn complete_bill(
        pool: &mut DbPool,
        session: &mut OrderSession,
        grand_total: f64,
        receipt_ref: &str,
    ) -> AppResult<Sale> {
        let table_no = session.table()?;
        let date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let sale = pool.with_tx(|tx| {
            require_table(tx, table_no)?;

            let id = insert_sale(tx, table_no, grand_total, &date, receipt_ref)?;
            let cleared = delete_orders_for_table(tx, table_no)?;
            set_table_status(tx, table_no, TableStatus::Free)?;

            ttlog(
                tx,
                "bill",
                &format!("table {}", table_no),
                &format!(
                    "Sale {} total {:.2}, {} lines cleared, receipt {}",
                    id, grand_total, cleared, receipt_ref
                ),
            )?;

            Ok(Sale {
                id,
                table_no,
                total: grand_total,
                date: date.clone(),
                receipt_file: receipt_ref.to_string(),
            })
        })?;

        session.clear();
        Ok(sale)
    }

    /// Full billing action: compute, render the receipt, then complete.
    ///
    /// An empty tab is rejected before anything is written. If the store
    /// update fails, the receipt just written is removed again so that the
    /// call can be retried from a clean state.
    pub fn bill_table(
        pool: &mut DbPool,
        session: &mut OrderSession,
        tax_percent: f64,
        receipts: &ReceiptGenerator,
    ) -> AppResult<(Sale, Bill)> {
        let bill = Self::compute_bill(pool, session, tax_percent)?;
        if bill.is_empty() {
            return Err(AppError::EmptyBill(bill.table_no));
        }

        let (path, grand_total) =
            receipts.generate(bill.table_no, &bill.lines, bill.subtotal, bill.tax_percent)?;
        let receipt_ref = path.to_string_lossy().to_string();

        match Self::complete_bill(pool, session, grand_total, &receipt_ref) {
            Ok(sale) => Ok((sale, bill)),
            Err(e) => {
                let _ = fs::remove_file(&path);
                Err(e)
            }
        }
    }

    /// Void the tab: delete every line and free the table. No sale is
    /// recorded. Returns the number of discarded lines.
    pub fn free_table(pool: &mut DbPool, session: &mut OrderSession) -> AppResult<usize> {
        let table_no = session.table()?;

        let discarded = pool.with_tx(|tx| {
            require_table(tx, table_no)?;
            let discarded = delete_orders_for_table(tx, table_no)?;
            set_table_status(tx, table_no, TableStatus::Free)?;

            ttlog(
                tx,
                "free",
                &format!("table {}", table_no),
                &format!("Table freed, {} unbilled lines discarded", discarded),
            )?;
            Ok(discarded)
        })?;

        session.clear();
        Ok(discarded)
    }

    /// Hand the table's pending lines over to the kitchen queue.
    ///
    /// Lines are pending from the moment they are added, so nothing
    /// changes state here; the pending lines are returned for display.
    pub fn send_to_kitchen(pool: &mut DbPool, session: &OrderSession) -> AppResult<Vec<OrderLine>> {
        let table_no = session.table()?;
        let pending: Vec<OrderLine> = Self::table_lines(pool, session)?
            .into_iter()
            .filter(|l| l.status == LineStatus::Pending)
            .collect();

        ttlog(
            &pool.conn,
            "send",
            &format!("table {}", table_no),
            &format!("{} pending lines sent to kitchen", pending.len()),
        )?;

        Ok(pending)
    }
}
