use crate::domain::a001_motorcycle::MotorcycleId;
use crate::enums::ServiceType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query intent for the maintenance register. Date arms bound the
/// performed-at date, both ends inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceFilter {
    pub motorcycle_id: Option<MotorcycleId>,
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub completed_only: bool,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Cost rollup over completed maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceCostTotals {
    pub total_cost: f64,
    pub labor_cost: f64,
    pub parts_cost: f64,
    pub record_count: usize,
    pub average_cost: f64,
}
