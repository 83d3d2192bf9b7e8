// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, sales_to_table};
use crate::export::pdf::{Align, PdfManager};
use crate::export::{SaleExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Sales table followed by the summed total.
pub(crate) fn export_pdf(sales: &[SaleExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let rows = sales_to_table(sales);
    let total: f64 = sales.iter().map(|s| s.total).sum();

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &rows);
    pdf.text_line(
        &format!("Total Sales: {:.2}", total),
        12.0,
        true,
        Align::Left,
        (0.0, 0.0, 0.0),
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
