use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{COKE, VEG_BURGER, init_cli_store, pos};

#[test]
fn test_init_seeds_tables_and_menu() {
    let (db, receipts) = init_cli_store("cli_init_seeds");

    pos()
        .args(["--db", &db, "--receipts", &receipts, "tables"])
        .assert()
        .success()
        .stdout(contains("Tables"))
        .stdout(contains("8 free, 0 occupied"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "menu"])
        .assert()
        .success()
        .stdout(contains("Margherita Pizza"))
        .stdout(contains("Coke"))
        .stdout(contains("1.50"));
}

#[test]
fn test_menu_category_filter() {
    let (db, receipts) = init_cli_store("cli_menu_category");

    pos()
        .args(["--db", &db, "--receipts", &receipts, "menu", "--category", "burger"])
        .assert()
        .success()
        .stdout(contains("Veg Burger"))
        .stdout(contains("Chicken Burger"))
        .stdout(contains("Coke").not());
}

#[test]
fn test_order_add_and_show() {
    let (db, receipts) = init_cli_store("cli_order_add_show");
    let coke = COKE.to_string();

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "3", "--item", &coke,
            "--qty", "2",
        ])
        .assert()
        .success()
        .stdout(contains("Added 2 x Coke to table 3"))
        .stdout(contains("3.00"));

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "show", "--table", "3", "--tax", "5",
        ])
        .assert()
        .success()
        .stdout(contains("Subtotal"))
        .stdout(contains("3.15"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "tables"])
        .assert()
        .success()
        .stdout(contains("7 free, 1 occupied"));
}

#[test]
fn test_order_add_requires_table() {
    let (db, receipts) = init_cli_store("cli_order_requires_table");

    pos()
        .args(["--db", &db, "--receipts", &receipts, "order", "add", "--item", "1"])
        .assert()
        .failure()
        .stderr(contains("No table selected"));
}

#[test]
fn test_order_add_rejects_zero_qty() {
    let (db, receipts) = init_cli_store("cli_order_zero_qty");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "1", "--item", "1",
            "--qty", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid quantity"));
}

#[test]
fn test_kitchen_flow() {
    let (db, receipts) = init_cli_store("cli_kitchen_flow");
    let burger = VEG_BURGER.to_string();

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "2", "--item",
            &burger,
        ])
        .assert()
        .success();

    pos()
        .args(["--db", &db, "--receipts", &receipts, "order", "send", "--table", "2"])
        .assert()
        .success()
        .stdout(contains("sent to kitchen (1 pending items)"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "kitchen", "list"])
        .assert()
        .success()
        .stdout(contains("Veg Burger"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "kitchen", "done", "--line", "1"])
        .assert()
        .success()
        .stdout(contains("Line 1 marked prepared"))
        .stdout(contains("Nothing pending"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "kitchen", "done", "--line", "99"])
        .assert()
        .success()
        .stdout(contains("No order line with id 99"));
}

#[test]
fn test_bill_writes_receipt_and_records_sale() {
    let (db, receipts) = init_cli_store("cli_bill_flow");
    let coke = COKE.to_string();

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "3", "--item", &coke,
            "--qty", "2",
        ])
        .assert()
        .success();

    pos()
        .args(["--db", &db, "--receipts", &receipts, "bill", "--table", "3", "--tax", "5"])
        .assert()
        .success()
        .stdout(contains("Grand Total"))
        .stdout(contains("3.15"))
        .stdout(contains("Bill printed and saved to"))
        .stdout(contains("receipt_table3_"));

    let pdfs: Vec<_> = fs::read_dir(&receipts)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "pdf"))
        .collect();
    assert_eq!(pdfs.len(), 1);

    pos()
        .args(["--db", &db, "--receipts", &receipts, "sales"])
        .assert()
        .success()
        .stdout(contains("Total Sales: "))
        .stdout(contains("3.15"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "tables"])
        .assert()
        .success()
        .stdout(contains("8 free, 0 occupied"));
}

#[test]
fn test_bill_empty_table_fails() {
    let (db, receipts) = init_cli_store("cli_bill_empty");

    pos()
        .args(["--db", &db, "--receipts", &receipts, "bill", "--table", "1"])
        .assert()
        .failure()
        .stderr(contains("No orders for table 1 to bill"));

    assert_eq!(fs::read_dir(&receipts).unwrap().count(), 0);
}

#[test]
fn test_free_table_with_yes() {
    let (db, receipts) = init_cli_store("cli_free_table");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "5", "--item", "1",
        ])
        .assert()
        .success();

    pos()
        .args(["--db", &db, "--receipts", &receipts, "free", "--table", "5", "--yes"])
        .assert()
        .success()
        .stdout(contains("Table 5 is free (1 unbilled lines discarded)"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "sales"])
        .assert()
        .success()
        .stdout(contains("No sales recorded"));
}

#[test]
fn test_free_table_declined() {
    let (db, receipts) = init_cli_store("cli_free_declined");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "4", "--item", "1",
        ])
        .assert()
        .success();

    pos()
        .args(["--db", &db, "--receipts", &receipts, "free", "--table", "4"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    pos()
        .args(["--db", &db, "--receipts", &receipts, "tables"])
        .assert()
        .success()
        .stdout(contains("7 free, 1 occupied"));
}

#[test]
fn test_log_records_operations() {
    let (db, receipts) = init_cli_store("cli_log_ops");

    pos()
        .args([
            "--db", &db, "--receipts", &receipts, "order", "add", "--table", "1", "--item", "1",
        ])
        .assert()
        .success();

    pos()
        .args(["--db", &db, "--receipts", &receipts, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("seed"))
        .stdout(contains("table 1"));
}

#[test]
fn test_db_check_and_info() {
    let (db, receipts) = init_cli_store("cli_db_check");

    pos()
        .args(["--db", &db, "--receipts", &receipts, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Menu items"));
}
