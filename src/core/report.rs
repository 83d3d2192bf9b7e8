//! Read-only snapshots: floor plan, menu, kitchen queue, sales report.

use crate::db::pool::DbPool;
use crate::db::queries::{load_menu, load_pending_orders, load_sales, load_tables};
use crate::errors::AppResult;
use crate::models::menu_item::MenuItem;
use crate::models::order_line::OrderLine;
use crate::models::sale::Sale;
use crate::models::table::Table;
use crate::utils::range::parse_range;
use chrono::NaiveDate;

/// Sales newest first, with their summed total.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub sales: Vec<Sale>,
    pub total: f64,
    pub bounds: Option<(NaiveDate, NaiveDate)>,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn floor(pool: &mut DbPool) -> AppResult<Vec<Table>> {
        Ok(load_tables(&pool.conn)?)
    }

    pub fn menu(pool: &mut DbPool, category: Option<&str>) -> AppResult<Vec<MenuItem>> {
        Ok(load_menu(&pool.conn, category)?)
    }

    /// Every pending line across all tables, oldest first.
    pub fn kitchen_queue(pool: &mut DbPool) -> AppResult<Vec<OrderLine>> {
        Ok(load_pending_orders(&pool.conn)?)
    }

    /// `range` accepts the expressions of [`parse_range`]; `None` means all.
    pub fn sales(pool: &mut DbPool, range: Option<&str>) -> AppResult<SalesReport> {
        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        let sales = load_sales(&pool.conn, bounds)?;
        let total = sales.iter().map(|s| s.total).sum();

        Ok(SalesReport {
            sales,
            total,
            bounds,
        })
    }
}
