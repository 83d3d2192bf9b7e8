pub mod backup;
pub mod bill;
pub mod config;
pub mod db;
pub mod export;
pub mod free;
pub mod init;
pub mod kitchen;
pub mod log;
pub mod menu;
pub mod order;
pub mod sales;
pub mod tables;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the store the way every command expects it: directories created,
/// schema migrated, default tables and menu seeded when empty.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    cfg.ensure_dirs()?;
    let pool = DbPool::new(cfg.database_path())?;
    init_db(&pool.conn, cfg.table_count)?;
    Ok(pool)
}
