use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::menu_item::SAMPLE_MENU;
use crate::models::table_status::TableStatus;
use rusqlite::{Connection, params};

/// Create tables 1..=count when the `tables` collection is empty.
/// Returns the number of rows inserted.
pub fn seed_tables(conn: &Connection, count: i64) -> AppResult<usize> {
    if count < 1 {
        return Err(AppError::Config(format!(
            "table_count must be at least 1, got {}",
            count
        )));
    }

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM tables", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare("INSERT INTO tables (table_no, status) VALUES (?1, ?2)")?;
        for t in 1..=count {
            stmt.execute(params![t, TableStatus::Free.to_db_str()])?;
        }
    }
    ttlog(&tx, "seed", "tables", &format!("Created {} tables", count))?;
    tx.commit()?;

    Ok(count as usize)
}

/// Insert the sample menu when the `menu` collection is empty.
pub fn seed_menu(conn: &Connection) -> AppResult<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM menu", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare("INSERT INTO menu (name, price, category) VALUES (?1, ?2, ?3)")?;
        for (name, price, category) in SAMPLE_MENU {
            stmt.execute(params![name, price, category])?;
        }
    }
    ttlog(
        &tx,
        "seed",
        "menu",
        &format!("Inserted {} sample menu items", SAMPLE_MENU.len()),
    )?;
    tx.commit()?;

    Ok(SAMPLE_MENU.len())
}
