use std::fs;
use tablepos::models::bill::BillLine;
use tablepos::receipt::{ReceiptGenerator, receipt_file_name, render_receipt, reserve_receipt_file};

mod common;
use common::temp_dir;

fn coke_line() -> BillLine {
    BillLine {
        name: "Coke".to_string(),
        qty: 2,
        unit_price: 1.50,
        line_total: 3.00,
    }
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

#[test]
fn test_receipt_file_name_format() {
    assert_eq!(
        receipt_file_name(3, 1_700_000_000),
        "receipt_table3_1700000000.pdf"
    );
}

#[test]
fn test_generate_writes_pdf() {
    let dir = temp_dir("generate_writes_pdf");
    let receipts = ReceiptGenerator::new(&dir, "Test Diner", "");

    let (path, total) = receipts.generate(3, &[coke_line()], 3.00, 5.0).unwrap();

    assert!((total - 3.15).abs() < 1e-9);
    assert!(path.exists());
    assert_eq!(path.parent().unwrap(), receipts.dir().as_path());

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("receipt_table3_"));
    assert!(name.ends_with(".pdf"));

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_generate_twice_gives_distinct_files() {
    let dir = temp_dir("generate_twice_distinct");
    let receipts = ReceiptGenerator::new(&dir, "Test Diner", "");

    let (a, _) = receipts.generate(1, &[coke_line()], 3.00, 5.0).unwrap();
    let (b, _) = receipts.generate(1, &[coke_line()], 3.00, 5.0).unwrap();

    assert_ne!(a, b);
    assert!(a.exists());
    assert!(b.exists());
}

#[test]
fn test_reserve_skips_taken_names() {
    let dir = temp_dir("reserve_skips_taken");

    let (first, _) = reserve_receipt_file(&dir, 5).unwrap();
    let (second, _) = reserve_receipt_file(&dir, 5).unwrap();

    assert_ne!(first, second);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);
}

#[test]
fn test_render_receipt_content() {
    let (bytes, total) = render_receipt(
        "Test Diner",
        "$",
        2,
        &[coke_line()],
        3.00,
        5.0,
        "2025-03-01 12:00:00",
    );

    assert!((total - 3.15).abs() < 1e-9);
    assert!(contains(&bytes, "Test Diner Receipt - Table 2"));
    assert!(contains(&bytes, "Date: 2025-03-01 12:00:00"));
    assert!(contains(&bytes, "Coke"));
    assert!(contains(&bytes, "Subtotal"));
    assert!(contains(&bytes, "5.0%"));
    assert!(contains(&bytes, "Grand Total"));
    assert!(contains(&bytes, "$3.15"));
    assert!(contains(&bytes, "Thank you for dining with us!"));
}

#[test]
fn test_render_receipt_is_deterministic() {
    let a = render_receipt("X", "", 1, &[coke_line()], 3.0, 5.0, "2025-01-01 00:00:00");
    let b = render_receipt("X", "", 1, &[coke_line()], 3.0, 5.0, "2025-01-01 00:00:00");
    assert_eq!(a.0, b.0);
}
