// src/export/logic.rs

use crate::core::report::ReportLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SaleExport;
use crate::export::pdf_export::export_pdf;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level sales export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the archived sales.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a range expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `a:b` with both sides of the same shape)
    ///
    /// Returns the number of exported sales.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let report = ReportLogic::sales(pool, range)?;

        if report.sales.is_empty() {
            warning("No sales found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<SaleExport> = report.sales.iter().map(SaleExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Pdf => export_pdf(&rows, path, &build_pdf_title(report.bounds))?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} sales exported as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}

/// PDF title for the selected period.
fn build_pdf_title(bounds: Option<(NaiveDate, NaiveDate)>) -> String {
    match bounds {
        None => "Sales Report".to_string(),
        Some((a, b)) if a == b => format!("Sales Report for {}", a),
        Some((a, b)) => format!("Sales Report from {} to {}", a, b),
    }
}
