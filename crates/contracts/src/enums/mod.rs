//! Shared enumerations of the system

pub mod priority;
pub mod service_type;
pub mod stock_status;

// Re-exports
pub use priority::Priority;
pub use service_type::ServiceType;
pub use stock_status::{StockStatus, LOW_STOCK_THRESHOLD};
