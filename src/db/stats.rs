use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORD COUNTS
    //
    for (label, table) in [
        ("Tables", "tables"),
        ("Menu items", "menu"),
        ("Open order lines", "orders"),
        ("Sales", "sales"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    let occupied: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM tables WHERE status = 'occupied'",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Occupied tables:{} {}", CYAN, RESET, occupied);

    //
    // 3) SALES DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT date FROM sales ORDER BY date ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row("SELECT date FROM sales ORDER BY date DESC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    println!("{}• Sales range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    let revenue: f64 = pool
        .conn
        .query_row("SELECT IFNULL(SUM(total), 0.0) FROM sales", [], |row| row.get(0))?;
    println!("{}• Revenue:{} {:.2}", CYAN, RESET, revenue);

    println!();
    Ok(())
}
