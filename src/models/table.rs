use super::table_status::TableStatus;
use serde::Serialize;

/// A physical table of the restaurant (⇔ `tables` row).
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub table_no: i64,
    pub status: TableStatus,
}
