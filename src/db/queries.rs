//! Typed accessors for the four record collections.
//!
//! Every function takes a plain `&Connection` so it can run either on the
//! pool connection or inside a `Transaction` (which derefs to one).

use crate::errors::AppError;
use crate::models::menu_item::MenuItem;
use crate::models::order_line::OrderLine;
use crate::models::sale::Sale;
use crate::models::table::Table;
use crate::models::table_status::{LineStatus, TableStatus};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn invalid_status(col: usize, value: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        col,
        rusqlite::types::Type::Text,
        Box::new(AppError::InvalidStatus(value)),
    )
}

// ---------------------------
// tables
// ---------------------------

pub fn map_table(row: &Row) -> Result<Table> {
    let status_str: String = row.get("status")?;
    let status =
        TableStatus::from_db_str(&status_str).ok_or_else(|| invalid_status(1, status_str))?;

    Ok(Table {
        table_no: row.get("table_no")?,
        status,
    })
}

pub fn load_tables(conn: &Connection) -> Result<Vec<Table>> {
    let mut stmt = conn.prepare("SELECT table_no, status FROM tables ORDER BY table_no")?;
    let rows = stmt.query_map([], map_table)?;
    rows.collect()
}

pub fn load_table(conn: &Connection, table_no: i64) -> Result<Option<Table>> {
    conn.query_row(
        "SELECT table_no, status FROM tables WHERE table_no = ?1",
        [table_no],
        map_table,
    )
    .optional()
}

pub fn set_table_status(conn: &Connection, table_no: i64, status: TableStatus) -> Result<usize> {
    conn.execute(
        "UPDATE tables SET status = ?1 WHERE table_no = ?2",
        params![status.to_db_str(), table_no],
    )
}

// ---------------------------
// menu
// ---------------------------

pub fn map_menu_item(row: &Row) -> Result<MenuItem> {
    Ok(MenuItem {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
        category: row.get("category")?,
    })
}

/// Menu ordered by category then name, optionally limited to one category
/// (case-insensitive).
pub fn load_menu(conn: &Connection, category: Option<&str>) -> Result<Vec<MenuItem>> {
    match category {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, name, price, category FROM menu ORDER BY category, name",
            )?;
            let rows = stmt.query_map([], map_menu_item)?;
            rows.collect()
        }
        Some(cat) => {
            let mut stmt = conn.prepare(
                "SELECT id, name, price, category FROM menu
                 WHERE category = ?1 COLLATE NOCASE
                 ORDER BY category, name",
            )?;
            let rows = stmt.query_map([cat], map_menu_item)?;
            rows.collect()
        }
    }
}

pub fn load_menu_item(conn: &Connection, id: i64) -> Result<Option<MenuItem>> {
    conn.query_row(
        "SELECT id, name, price, category FROM menu WHERE id = ?1",
        [id],
        map_menu_item,
    )
    .optional()
}

// ---------------------------
// orders
// ---------------------------

pub fn map_order_line(row: &Row) -> Result<OrderLine> {
    let status_str: String = row.get("status")?;
    let status = LineStatus::from_db_str(&status_str).ok_or_else(|| invalid_status(6, status_str))?;

    Ok(OrderLine {
        id: row.get("id")?,
        table_no: row.get("table_no")?,
        item_id: row.get("item_id")?,
        item_name: row.get("item_name")?,
        qty: row.get("qty")?,
        price: row.get("price")?,
        status,
        timestamp: row.get("timestamp")?,
    })
}

const ORDER_COLUMNS: &str = "id, table_no, item_id, item_name, qty, price, status, timestamp";

/// Insert a pending line and return its id.
pub fn insert_order_line(
    conn: &Connection,
    table_no: i64,
    item: &MenuItem,
    qty: i64,
    timestamp: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO orders (table_no, item_id, item_name, qty, price, status, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            table_no,
            item.id,
            item.name,
            qty,
            item.price,
            LineStatus::Pending.to_db_str(),
            timestamp,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_orders_for_table(conn: &Connection, table_no: i64) -> Result<Vec<OrderLine>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE table_no = ?1 ORDER BY id"
    ))?;
    let rows = stmt.query_map([table_no], map_order_line)?;
    rows.collect()
}

pub fn load_order_line(conn: &Connection, id: i64) -> Result<Option<OrderLine>> {
    conn.query_row(
        &format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1"),
        [id],
        map_order_line,
    )
    .optional()
}

/// Kitchen queue: every pending line, oldest first.
pub fn load_pending_orders(conn: &Connection) -> Result<Vec<OrderLine>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE status = 'pending' ORDER BY timestamp, id"
    ))?;
    let rows = stmt.query_map([], map_order_line)?;
    rows.collect()
}

pub fn count_orders_for_table(conn: &Connection, table_no: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM orders WHERE table_no = ?1",
        [table_no],
        |row| row.get(0),
    )
}

pub fn mark_order_prepared(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute(
        "UPDATE orders SET status = ?1 WHERE id = ?2",
        params![LineStatus::Prepared.to_db_str(), id],
    )
}

pub fn delete_order_line(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM orders WHERE id = ?1", [id])
}

pub fn delete_orders_for_table(conn: &Connection, table_no: i64) -> Result<usize> {
    conn.execute("DELETE FROM orders WHERE table_no = ?1", [table_no])
}

// ---------------------------
// sales
// ---------------------------

pub fn map_sale(row: &Row) -> Result<Sale> {
    Ok(Sale {
        id: row.get("id")?,
        table_no: row.get("table_no")?,
        total: row.get("total")?,
        date: row.get("date")?,
        receipt_file: row.get("receipt_file")?,
    })
}

pub fn insert_sale(
    conn: &Connection,
    table_no: i64,
    total: f64,
    date: &str,
    receipt_file: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO sales (table_no, total, date, receipt_file) VALUES (?1, ?2, ?3, ?4)",
        params![table_no, total, date, receipt_file],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Sales newest first, optionally restricted to an inclusive date range.
pub fn load_sales(conn: &Connection, bounds: Option<(NaiveDate, NaiveDate)>) -> Result<Vec<Sale>> {
    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, table_no, total, date, receipt_file FROM sales
                 ORDER BY date DESC, id DESC",
            )?;
            let rows = stmt.query_map([], map_sale)?;
            rows.collect()
        }
        Some((start, end)) => {
            let mut stmt = conn.prepare(
                "SELECT id, table_no, total, date, receipt_file FROM sales
                 WHERE substr(date, 1, 10) BETWEEN ?1 AND ?2
                 ORDER BY date DESC, id DESC",
            )?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_sale,
            )?;
            rows.collect()
        }
    }
}

pub fn count_sales(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))
}
