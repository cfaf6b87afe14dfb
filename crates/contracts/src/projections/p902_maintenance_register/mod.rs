pub mod dto;
pub mod service;

pub use dto::{MaintenanceCostTotals, MaintenanceFilter};
pub use service::{build_maintenance_cost_totals, maintenance_history};
