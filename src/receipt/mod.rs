//! PDF receipts for completed bills.

mod generator;
mod naming;

pub use generator::{ReceiptGenerator, render_receipt};
pub use naming::{receipt_file_name, reserve_receipt_file};
