use super::naming::reserve_receipt_file;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::{Align, PdfManager};
use crate::models::bill::{BillLine, grand_total, tax_amount};
use crate::utils::formatting::money;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const TITLE_BLUE: (f32, f32, f32) = (0.0, 0.31, 0.63);
const HEADER_FILL: (f32, f32, f32) = (0.78, 0.86, 1.0);

/// Writes one PDF per completed bill into a fixed directory.
#[derive(Debug, Clone)]
pub struct ReceiptGenerator {
    dir: PathBuf,
    restaurant_name: String,
    currency: String,
}

impl ReceiptGenerator {
    pub fn new(dir: impl Into<PathBuf>, restaurant_name: &str, currency: &str) -> Self {
        Self {
            dir: dir.into(),
            restaurant_name: restaurant_name.to_string(),
            currency: currency.to_string(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.receipts_path(), &cfg.restaurant_name, &cfg.currency)
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Render and write the receipt; returns the file path and the grand
    /// total (unrounded).
    pub fn generate(
        &self,
        table_no: i64,
        items: &[BillLine],
        subtotal: f64,
        tax_percent: f64,
    ) -> AppResult<(PathBuf, f64)> {
        fs::create_dir_all(&self.dir)?;

        let printed_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let (bytes, total) = render_receipt(
            &self.restaurant_name,
            &self.currency,
            table_no,
            items,
            subtotal,
            tax_percent,
            &printed_at,
        );

        let (path, mut file) = reserve_receipt_file(&self.dir, table_no)?;
        if let Err(e) = file.write_all(&bytes).and_then(|_| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(AppError::Receipt(format!(
                "failed to write {}: {}",
                path.display(),
                e
            )));
        }

        Ok((path, total))
    }
}

/// Lay out the receipt document. Pure: the same inputs give the same bytes.
pub fn render_receipt(
    restaurant_name: &str,
    currency: &str,
    table_no: i64,
    items: &[BillLine],
    subtotal: f64,
    tax_percent: f64,
    printed_at: &str,
) -> (Vec<u8>, f64) {
    let tax = tax_amount(subtotal, tax_percent);
    let total = grand_total(subtotal, tax_percent);

    let mut pdf = PdfManager::new();

    let w = pdf.content_width();
    let (item_w, qty_w, price_w, total_w) = (w * 0.50, w * 0.11, w * 0.17, w * 0.22);
    let label_w = item_w + qty_w + price_w;

    pdf.text_line(
        &format!("{} Receipt - Table {}", restaurant_name, table_no),
        16.0,
        true,
        Align::Center,
        TITLE_BLUE,
    );
    pdf.gap(8.0);
    pdf.text_line(
        &format!("Date: {}", printed_at),
        11.0,
        false,
        Align::Left,
        BLACK,
    );
    pdf.gap(8.0);

    pdf.cell_row(
        &[
            ("Item", item_w, Align::Center),
            ("Qty", qty_w, Align::Center),
            ("Price", price_w, Align::Center),
            ("Total", total_w, Align::Center),
        ],
        11.0,
        true,
        true,
        Some(HEADER_FILL),
    );

    for line in items {
        let qty = line.qty.to_string();
        let price = money(line.unit_price, currency);
        let line_total = money(line.line_total, currency);
        pdf.cell_row(
            &[
                (line.name.as_str(), item_w, Align::Left),
                (qty.as_str(), qty_w, Align::Center),
                (price.as_str(), price_w, Align::Right),
                (line_total.as_str(), total_w, Align::Right),
            ],
            11.0,
            false,
            true,
            None,
        );
    }

    pdf.gap(8.0);

    let subtotal_s = money(subtotal, currency);
    let tax_label = format!("Tax ({:.1}%)", tax_percent);
    let tax_s = money(tax, currency);
    let total_s = money(total, currency);

    pdf.cell_row(
        &[
            ("Subtotal", label_w, Align::Left),
            (subtotal_s.as_str(), total_w, Align::Right),
        ],
        11.0,
        false,
        false,
        None,
    );
    pdf.cell_row(
        &[
            (tax_label.as_str(), label_w, Align::Left),
            (tax_s.as_str(), total_w, Align::Right),
        ],
        11.0,
        false,
        false,
        None,
    );
    pdf.cell_row(
        &[
            ("Grand Total", label_w, Align::Left),
            (total_s.as_str(), total_w, Align::Right),
        ],
        12.0,
        true,
        false,
        None,
    );

    pdf.gap(16.0);
    pdf.text_line(
        "Thank you for dining with us!",
        10.0,
        false,
        Align::Center,
        BLACK,
    );

    (pdf.finish(), total)
}
