// src/export/model.rs

use crate::models::sale::Sale;
use crate::utils::formatting::short_path;
use serde::Serialize;

/// Flat sale record shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct SaleExport {
    pub id: i64,
    pub table_no: i64,
    pub total: f64,
    pub date: String,
    pub receipt_file: String,
}

impl From<&Sale> for SaleExport {
    fn from(s: &Sale) -> Self {
        Self {
            id: s.id,
            table_no: s.table_no,
            // cents are what was charged; the stored f64 may carry noise
            total: (s.total * 100.0).round() / 100.0,
            date: s.date.clone(),
            receipt_file: s.receipt_file.clone(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "table", "total", "date", "receipt"]
}

pub(crate) fn sale_to_row(s: &SaleExport) -> Vec<String> {
    vec![
        s.id.to_string(),
        s.table_no.to_string(),
        format!("{:.2}", s.total),
        s.date.clone(),
        short_path(&s.receipt_file),
    ]
}

pub(crate) fn sales_to_table(sales: &[SaleExport]) -> Vec<Vec<String>> {
    sales.iter().map(sale_to_row).collect()
}
