#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tablepos::db::initialize::init_db;
use tablepos::db::pool::DbPool;

/// Menu ids of the seeded sample menu.
pub const VEG_BURGER: i64 = 3;
pub const COKE: i64 = 6;
pub const FRENCH_FRIES: i64 = 8;

pub fn pos() -> Command {
    cargo_bin_cmd!("tablepos")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tablepos.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tablepos_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// In-memory store with the default eight tables and the sample menu
pub fn memory_store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn, 8).expect("init db");
    pool
}

/// `init` a file database through the CLI and return (db, receipts dir)
pub fn init_cli_store(name: &str) -> (String, String) {
    let db_path = setup_test_db(name);
    let receipts = temp_dir(&format!("{}_receipts", name))
        .to_string_lossy()
        .to_string();

    pos()
        .args(["--db", &db_path, "--receipts", &receipts, "--test", "init"])
        .assert()
        .success();

    (db_path, receipts)
}
