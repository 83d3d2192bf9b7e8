/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::table_status::{LineStatus, TableStatus};

/// Free tables are green, occupied ones red (as on the floor plan).
pub fn color_for_table(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Free => GREEN,
        TableStatus::Occupied => RED,
    }
}

pub fn color_for_line(status: LineStatus) -> &'static str {
    match status {
        LineStatus::Pending => YELLOW,
        LineStatus::Prepared => GREEN,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
