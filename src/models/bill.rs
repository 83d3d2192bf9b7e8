use super::order_line::OrderLine;
use serde::Serialize;

/// One row of a bill / receipt.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BillLine {
    pub name: String,
    pub qty: i64,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Totals of a table's open tab for a given tax percent.
///
/// Amounts are plain `f64`; rounding to cents happens only when printed.
#[derive(Debug, Clone, Serialize)]
pub struct Bill {
    pub table_no: i64,
    pub lines: Vec<BillLine>,
    pub subtotal: f64,
    pub tax_percent: f64,
    pub tax: f64,
    pub grand_total: f64,
}

impl Bill {
    pub fn from_lines(table_no: i64, lines: &[OrderLine], tax_percent: f64) -> Self {
        let lines: Vec<BillLine> = lines
            .iter()
            .map(|l| BillLine {
                name: l.item_name.clone(),
                qty: l.qty,
                unit_price: l.price,
                line_total: l.line_total(),
            })
            .collect();

        let subtotal: f64 = lines.iter().map(|l| l.line_total).sum();
        let tax = tax_amount(subtotal, tax_percent);

        Self {
            table_no,
            lines,
            subtotal,
            tax_percent,
            tax,
            grand_total: subtotal + tax,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn tax_amount(subtotal: f64, tax_percent: f64) -> f64 {
    subtotal * tax_percent / 100.0
}

/// `subtotal + subtotal × tax_percent / 100`
pub fn grand_total(subtotal: f64, tax_percent: f64) -> f64 {
    subtotal + tax_amount(subtotal, tax_percent)
}
