pub mod bill;
pub mod menu_item;
pub mod order_line;
pub mod sale;
pub mod table;
pub mod table_status;
