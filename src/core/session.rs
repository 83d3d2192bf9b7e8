use crate::errors::{AppError, AppResult};

/// The table an operator is currently working on.
///
/// Passed explicitly to every lifecycle operation that needs a table;
/// billing and freeing clear it, like closing the table's screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSession {
    table_no: Option<i64>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_table(table_no: i64) -> Self {
        Self {
            table_no: Some(table_no),
        }
    }

    /// Build from an optional CLI argument.
    pub fn from_arg(table_no: Option<i64>) -> Self {
        Self { table_no }
    }

    pub fn select(&mut self, table_no: i64) {
        self.table_no = Some(table_no);
    }

    pub fn clear(&mut self) {
        self.table_no = None;
    }

    pub fn selected(&self) -> Option<i64> {
        self.table_no
    }

    /// Selected table, or `NoTableSelected`.
    pub fn table(&self) -> AppResult<i64> {
        self.table_no.ok_or(AppError::NoTableSelected)
    }
}
