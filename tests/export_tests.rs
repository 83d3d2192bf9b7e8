use predicates::str::contains;
use std::fs;

mod common;
use common::{COKE, init_cli_store, pos, temp_out};

fn store_with_sale(name: &str) -> (String, String) {
    let (db, receipts) = init_cli_store(name);
    let coke = COKE.to_string();

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "2", "--item", &coke,
            "--qty", "2",
        ])
        .assert()
        .success();

    pos()
        .args(["--db", &db, "--receipts", &receipts, "bill", "--table", "2", "--tax", "5"])
        .assert()
        .success();

    (db, receipts)
}

#[test]
fn test_export_csv() {
    let (db, receipts) = store_with_sale("export_csv");
    let out = temp_out("export_csv", "csv");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("1 sales exported"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,table_no,total,date,receipt_file"));
    assert!(content.contains("3.15"));
    assert!(content.contains("receipt_table2_"));
}

#[test]
fn test_export_json() {
    let (db, receipts) = store_with_sale("export_json");
    let out = temp_out("export_json", "json");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["table_no"], 2);
    assert_eq!(rows[0]["total"], 3.15);
}

#[test]
fn test_export_pdf() {
    let (db, receipts) = store_with_sale("export_pdf");
    let out = temp_out("export_pdf", "pdf");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "export", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let (db, receipts) = store_with_sale("export_empty_range");
    let out = temp_out("export_empty_range", "csv");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "export", "--format", "csv", "--file", &out,
            "--range", "1999",
        ])
        .assert()
        .success()
        .stdout(contains("No sales found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let (db, receipts) = store_with_sale("export_relative");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "export", "--format", "csv", "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_creates_copy() {
    let (db, receipts) = store_with_sale("backup_copy");
    let out = temp_out("backup_copy", "sqlite");

    pos()
        .args(["--db", &db, "--receipts", &receipts, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compress_keeps_existing_zip_when_declined() {
    let (db, receipts) = store_with_sale("backup_zip_declined");
    let out = temp_out("backup_zip_declined", "sqlite");
    let zip = std::path::Path::new(&out).with_extension("zip");
    fs::write(&zip, "PRECIOUS").unwrap();

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "backup", "--file", &out, "--compress",
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Backup cancelled"));

    assert_eq!(fs::read_to_string(&zip).unwrap(), "PRECIOUS");
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compress_force_replaces_zip() {
    let (db, receipts) = store_with_sale("backup_zip_force");
    let out = temp_out("backup_zip_force", "sqlite");
    let zip = std::path::Path::new(&out).with_extension("zip");
    fs::write(&zip, "PRECIOUS").unwrap();

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "backup", "--file", &out, "--compress",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Backup created and compressed"));

    let bytes = fs::read(&zip).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(!std::path::Path::new(&out).exists());
}
