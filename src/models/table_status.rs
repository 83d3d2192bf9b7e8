use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableStatus {
    Free,
    Occupied,
}

impl TableStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TableStatus::Free => "free",
            TableStatus::Occupied => "occupied",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "free" => Some(TableStatus::Free),
            "occupied" => Some(TableStatus::Occupied),
            _ => None,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, TableStatus::Free)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineStatus {
    Pending,
    Prepared,
}

impl LineStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LineStatus::Pending => "pending",
            LineStatus::Prepared => "prepared",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(LineStatus::Pending),
            "prepared" => Some(LineStatus::Prepared),
            _ => None,
        }
    }
}
