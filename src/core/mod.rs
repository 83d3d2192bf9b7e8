pub mod backup;
pub mod config;
pub mod log;
pub mod order;
pub mod report;
pub mod session;

pub use order::OrderLogic;
pub use session::OrderSession;
