use tablepos::core::{OrderLogic, OrderSession};
use tablepos::db::queries::{count_sales, load_orders_for_table, load_table};
use tablepos::errors::AppError;
use tablepos::models::table_status::{LineStatus, TableStatus};
use tablepos::receipt::ReceiptGenerator;

mod common;
use common::{COKE, FRENCH_FRIES, VEG_BURGER, memory_store, temp_dir};

fn status_of(pool: &tablepos::db::pool::DbPool, table_no: i64) -> TableStatus {
    load_table(&pool.conn, table_no)
        .expect("load table")
        .expect("table exists")
        .status
}

#[test]
fn test_seeded_floor_is_free() {
    let pool = memory_store();
    for t in 1..=8 {
        assert_eq!(status_of(&pool, t), TableStatus::Free);
    }
    assert!(load_table(&pool.conn, 9).unwrap().is_none());
}

#[test]
fn test_add_item_occupies_table() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(3);

    let line = OrderLogic::add_item(&mut pool, &session, Some(COKE), 2).unwrap();

    assert_eq!(line.table_no, 3);
    assert_eq!(line.item_name, "Coke");
    assert_eq!(line.qty, 2);
    assert_eq!(line.status, LineStatus::Pending);
    assert_eq!(status_of(&pool, 3), TableStatus::Occupied);

    let lines = load_orders_for_table(&pool.conn, 3).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].price, 1.50);
}

#[test]
fn test_repeated_add_creates_separate_lines() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(1);

    OrderLogic::add_item(&mut pool, &session, Some(FRENCH_FRIES), 1).unwrap();
    OrderLogic::add_item(&mut pool, &session, Some(FRENCH_FRIES), 1).unwrap();

    let lines = OrderLogic::table_lines(&mut pool, &session).unwrap();
    assert_eq!(lines.len(), 2);
    assert_ne!(lines[0].id, lines[1].id);
}

#[test]
fn test_add_item_rejects_bad_input() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(1);

    assert!(matches!(
        OrderLogic::add_item(&mut pool, &session, Some(COKE), 0),
        Err(AppError::InvalidQuantity(0))
    ));
    assert!(matches!(
        OrderLogic::add_item(&mut pool, &session, None, 1),
        Err(AppError::NoMenuItemSelected)
    ));
    assert!(matches!(
        OrderLogic::add_item(&mut pool, &OrderSession::new(), Some(COKE), 1),
        Err(AppError::NoTableSelected)
    ));
    assert!(matches!(
        OrderLogic::add_item(&mut pool, &session, Some(999), 1),
        Err(AppError::UnknownMenuItem(999))
    ));
    assert!(matches!(
        OrderLogic::add_item(&mut pool, &OrderSession::for_table(42), Some(COKE), 1),
        Err(AppError::UnknownTable(42))
    ));

    // nothing was written
    assert!(load_orders_for_table(&pool.conn, 1).unwrap().is_empty());
    assert_eq!(status_of(&pool, 1), TableStatus::Free);
}

#[test]
fn test_compute_bill_totals() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(2);

    OrderLogic::add_item(&mut pool, &session, Some(COKE), 2).unwrap();

    let bill = OrderLogic::compute_bill(&mut pool, &session, 5.0).unwrap();
    assert!((bill.subtotal - 3.00).abs() < 1e-9);
    assert!((bill.tax - 0.15).abs() < 1e-9);
    assert!((bill.grand_total - 3.15).abs() < 1e-9);

    OrderLogic::add_item(&mut pool, &session, Some(VEG_BURGER), 1).unwrap();
    let bill = OrderLogic::compute_bill(&mut pool, &session, 0.0).unwrap();
    assert!((bill.grand_total - 8.00).abs() < 1e-9);
    assert_eq!(bill.lines.len(), 2);
}

#[test]
fn test_compute_bill_rejects_bad_tax() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(2);

    assert!(matches!(
        OrderLogic::compute_bill(&mut pool, &session, -1.0),
        Err(AppError::InvalidTax(_))
    ));
    assert!(matches!(
        OrderLogic::compute_bill(&mut pool, &session, 150.0),
        Err(AppError::InvalidTax(_))
    ));
}

#[test]
fn test_remove_item_and_table_release() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(4);

    let a = OrderLogic::add_item(&mut pool, &session, Some(COKE), 1).unwrap();
    let b = OrderLogic::add_item(&mut pool, &session, Some(VEG_BURGER), 1).unwrap();

    let removed = OrderLogic::remove_item(&mut pool, Some(a.id)).unwrap().unwrap();
    assert_eq!(removed.line.id, a.id);
    assert!(!removed.table_freed);
    assert_eq!(status_of(&pool, 4), TableStatus::Occupied);

    let removed = OrderLogic::remove_item(&mut pool, Some(b.id)).unwrap().unwrap();
    assert!(removed.table_freed);
    assert_eq!(status_of(&pool, 4), TableStatus::Free);
}

#[test]
fn test_remove_unknown_line_is_noop() {
    let mut pool = memory_store();
    assert!(OrderLogic::remove_item(&mut pool, Some(12345)).unwrap().is_none());
    assert!(matches!(
        OrderLogic::remove_item(&mut pool, None),
        Err(AppError::NoOrderLineSelected)
    ));
}

#[test]
fn test_mark_prepared() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(5);
    let line = OrderLogic::add_item(&mut pool, &session, Some(COKE), 1).unwrap();

    assert!(OrderLogic::mark_prepared(&mut pool, Some(line.id)).unwrap());
    let lines = OrderLogic::table_lines(&mut pool, &session).unwrap();
    assert_eq!(lines[0].status, LineStatus::Prepared);

    // prepared is terminal: marking again still reports the line exists
    assert!(OrderLogic::mark_prepared(&mut pool, Some(line.id)).unwrap());
    assert!(!OrderLogic::mark_prepared(&mut pool, Some(9999)).unwrap());
}

#[test]
fn test_send_to_kitchen_returns_pending_only() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(6);
    let a = OrderLogic::add_item(&mut pool, &session, Some(COKE), 1).unwrap();
    OrderLogic::add_item(&mut pool, &session, Some(FRENCH_FRIES), 2).unwrap();
    OrderLogic::mark_prepared(&mut pool, Some(a.id)).unwrap();

    let pending = OrderLogic::send_to_kitchen(&mut pool, &session).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].item_name, "French Fries");
}

#[test]
fn test_complete_bill_records_sale_and_frees_table() {
    let mut pool = memory_store();
    let mut session = OrderSession::for_table(7);
    OrderLogic::add_item(&mut pool, &session, Some(COKE), 2).unwrap();

    let sale = OrderLogic::complete_bill(&mut pool, &mut session, 3.15, "receipt.pdf").unwrap();

    assert_eq!(sale.table_no, 7);
    assert!((sale.total - 3.15).abs() < 1e-9);
    assert_eq!(sale.receipt_file, "receipt.pdf");
    assert_eq!(count_sales(&pool.conn).unwrap(), 1);
    assert!(load_orders_for_table(&pool.conn, 7).unwrap().is_empty());
    assert_eq!(status_of(&pool, 7), TableStatus::Free);
    assert_eq!(session.selected(), None);

    // a cleared session can be pointed at another table
    session.select(2);
    assert_eq!(session.table().unwrap(), 2);
}

#[test]
fn test_bill_table_writes_receipt() {
    let mut pool = memory_store();
    let dir = temp_dir("bill_table_writes_receipt");
    let receipts = ReceiptGenerator::new(&dir, "Test Diner", "");
    let mut session = OrderSession::for_table(3);
    OrderLogic::add_item(&mut pool, &session, Some(COKE), 2).unwrap();

    let (sale, bill) = OrderLogic::bill_table(&mut pool, &mut session, 5.0, &receipts).unwrap();

    assert!((bill.grand_total - 3.15).abs() < 1e-9);
    assert!((sale.total - 3.15).abs() < 1e-9);
    assert!(std::path::Path::new(&sale.receipt_file).exists());
    assert_eq!(status_of(&pool, 3), TableStatus::Free);
}

#[test]
fn test_bill_empty_table_is_rejected() {
    let mut pool = memory_store();
    let dir = temp_dir("bill_empty_table");
    let receipts = ReceiptGenerator::new(&dir, "Test Diner", "");
    let mut session = OrderSession::for_table(1);

    let res = OrderLogic::bill_table(&mut pool, &mut session, 5.0, &receipts);
    assert!(matches!(res, Err(AppError::EmptyBill(1))));

    assert_eq!(count_sales(&pool.conn).unwrap(), 0);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    assert_eq!(status_of(&pool, 1), TableStatus::Free);
    assert_eq!(session.selected(), Some(1));
}

#[test]
fn test_free_table_discards_without_sale() {
    let mut pool = memory_store();
    let mut session = OrderSession::for_table(8);
    OrderLogic::add_item(&mut pool, &session, Some(COKE), 1).unwrap();
    OrderLogic::add_item(&mut pool, &session, Some(VEG_BURGER), 1).unwrap();

    let discarded = OrderLogic::free_table(&mut pool, &mut session).unwrap();

    assert_eq!(discarded, 2);
    assert_eq!(count_sales(&pool.conn).unwrap(), 0);
    assert!(load_orders_for_table(&pool.conn, 8).unwrap().is_empty());
    assert_eq!(status_of(&pool, 8), TableStatus::Free);
}

#[test]
fn test_tables_are_independent() {
    let mut pool = memory_store();
    let mut one = OrderSession::for_table(1);
    let two = OrderSession::for_table(2);
    OrderLogic::add_item(&mut pool, &one, Some(COKE), 1).unwrap();
    OrderLogic::add_item(&mut pool, &two, Some(VEG_BURGER), 1).unwrap();

    OrderLogic::free_table(&mut pool, &mut one).unwrap();

    assert_eq!(status_of(&pool, 1), TableStatus::Free);
    assert_eq!(status_of(&pool, 2), TableStatus::Occupied);
    assert_eq!(load_orders_for_table(&pool.conn, 2).unwrap().len(), 1);
}

#[test]
fn test_failed_bill_rolls_back_and_removes_receipt() {
    let mut pool = memory_store();
    let dir = temp_dir("failed_bill_rolls_back");
    let receipts = ReceiptGenerator::new(&dir, "Test Diner", "");
    let mut session = OrderSession::for_table(3);
    OrderLogic::add_item(&mut pool, &session, Some(COKE), 2).unwrap();

    // clearing the tab fails, after the sale row was already inserted
    pool.conn
        .execute_batch(
            "CREATE TRIGGER block_order_delete BEFORE DELETE ON orders
             BEGIN SELECT RAISE(ABORT, 'orders are locked'); END;",
        )
        .unwrap();

    let res = OrderLogic::bill_table(&mut pool, &mut session, 5.0, &receipts);

    assert!(res.is_err());
    assert_eq!(count_sales(&pool.conn).unwrap(), 0);
    assert_eq!(load_orders_for_table(&pool.conn, 3).unwrap().len(), 1);
    assert_eq!(status_of(&pool, 3), TableStatus::Occupied);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    assert_eq!(session.selected(), Some(3));
}

#[test]
fn test_mark_prepared_rolls_back_when_log_fails() {
    let mut pool = memory_store();
    let session = OrderSession::for_table(5);
    let line = OrderLogic::add_item(&mut pool, &session, Some(COKE), 1).unwrap();

    pool.conn
        .execute_batch(
            "CREATE TRIGGER block_log BEFORE INSERT ON log
             BEGIN SELECT RAISE(ABORT, 'log is read-only'); END;",
        )
        .unwrap();

    assert!(OrderLogic::mark_prepared(&mut pool, Some(line.id)).is_err());

    let lines = OrderLogic::table_lines(&mut pool, &session).unwrap();
    assert_eq!(lines[0].status, LineStatus::Pending);
}
