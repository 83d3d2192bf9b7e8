use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Every other migration records
/// itself here, so it must be created first.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the four record collections.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tables (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            table_no  INTEGER NOT NULL UNIQUE,
            status    TEXT NOT NULL DEFAULT 'free' CHECK(status IN ('free','occupied'))
        );

        CREATE TABLE IF NOT EXISTS menu (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            price     REAL NOT NULL,
            category  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS orders (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            table_no  INTEGER NOT NULL,
            item_id   INTEGER NOT NULL,
            item_name TEXT NOT NULL,
            qty       INTEGER NOT NULL CHECK(qty > 0),
            price     REAL NOT NULL,
            status    TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending','prepared')),
            timestamp TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sales (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            table_no     INTEGER NOT NULL,
            total        REAL NOT NULL,
            date         TEXT NOT NULL,
            receipt_file TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Indexes used by the order view and the kitchen queue.
fn migrate_add_order_indexes(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_order_indexes";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_orders_table ON orders(table_no);
        CREATE INDEX IF NOT EXISTS idx_orders_status_ts ON orders(status, timestamp);
        "#,
    )?;

    mark_applied(conn, version, "Added order indexes")
}

/// Index used by the sales report range filter.
fn migrate_add_sales_date_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_sales_date_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_sales_date ON sales(date);")?;

    mark_applied(conn, version, "Added sales date index")
}

pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_core_tables(conn)?;
    migrate_add_order_indexes(conn)?;
    migrate_add_sales_date_index(conn)?;
    Ok(())
}
