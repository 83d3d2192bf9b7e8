use serde::Serialize;

/// Archived bill (⇔ `sales` row). Append-only.
#[derive(Debug, Clone, Serialize)]
pub struct Sale {
    pub id: i64,
    pub table_no: i64,
    pub total: f64,
    pub date: String, // YYYY-MM-DD HH:MM:SS
    pub receipt_file: String,
}
