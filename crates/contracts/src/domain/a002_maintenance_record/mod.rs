pub mod aggregate;

pub use aggregate::{MaintenanceRecord, MaintenanceRecordDto, MaintenanceRecordId};
