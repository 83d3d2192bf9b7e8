use crate::db::migrate::run_pending_migrations;
use crate::db::seed::{seed_menu, seed_tables};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database: schema first, then default data.
///
/// Seeding only touches empty collections, so this is safe to run on
/// every start.
pub fn init_db(conn: &Connection, table_count: i64) -> AppResult<()> {
    run_pending_migrations(conn)?;
    seed_tables(conn, table_count)?;
    seed_menu(conn)?;
    Ok(())
}
