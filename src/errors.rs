//! Unified application error type.
//! All modules (db, core, receipt, cli) return AppError so that every
//! failure reaches the user through the same channel.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Missing selection
    // ---------------------------
    #[error("No table selected: please select a table first (--table)")]
    NoTableSelected,

    #[error("No menu item selected: please select a menu item to add (--item)")]
    NoMenuItemSelected,

    #[error("No order line selected: please select an order line (--line)")]
    NoOrderLineSelected,

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    #[error("Table {0} does not exist")]
    UnknownTable(i64),

    #[error("Menu item {0} does not exist")]
    UnknownMenuItem(i64),

    #[error("Invalid quantity {0}: quantity must be at least 1")]
    InvalidQuantity(i64),

    #[error("Invalid tax percent {0}: must be between 0 and 100")]
    InvalidTax(f64),

    #[error("No orders for table {0} to bill")]
    EmptyBill(i64),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Artifacts
    // ---------------------------
    #[error("Receipt error: {0}")]
    Receipt(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
