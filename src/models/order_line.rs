use super::table_status::LineStatus;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One item on a table's open tab (⇔ `orders` row).
///
/// Name and price are copied from the menu when the line is created.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    pub id: i64,
    pub table_no: i64,
    pub item_id: i64,
    pub item_name: String,
    pub qty: i64,
    pub price: f64,
    pub status: LineStatus,
    pub timestamp: String, // ⇔ orders.timestamp (TEXT, ISO8601)
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.qty as f64 * self.price
    }

    /// Timestamp as shown by the kitchen view: `YYYY-MM-DD HH:MM:SS`.
    pub fn display_time(&self) -> String {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| self.timestamp.replace('T', " ").chars().take(19).collect())
    }
}
