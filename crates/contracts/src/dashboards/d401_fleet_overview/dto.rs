use crate::domain::a001_motorcycle::MotorcycleId;
use crate::domain::a002_maintenance_record::MaintenanceRecordId;
use crate::enums::ServiceType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers for the garage landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_motorcycles: usize,
    pub active_motorcycles: usize,
    /// Combined odometer reading across the active fleet, km
    pub total_mileage: f64,
    /// Services due within the look-ahead window, not yet overdue
    pub upcoming_services: usize,
    pub overdue_services: usize,
    /// Maintenance and part spend over the trailing expense window
    pub monthly_expenses: f64,
    pub recent_activities: Vec<ActivityEntry>,
}

/// One line in the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: MaintenanceRecordId,
    /// Activity source, currently always "maintenance"
    pub kind: String,
    pub motorcycle_id: MotorcycleId,
    pub motorcycle_name: String,
    pub service_type: ServiceType,
    pub description: String,
    pub performed_at: NaiveDate,
    pub mileage_at_service: f64,
    pub total_cost: f64,
}

/// Fleet-level rollup for the motorcycles page header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_motorcycles: usize,
    pub total_mileage: f64,
    pub average_mileage: f64,
    pub newest_motorcycle: Option<FleetHighlight>,
    pub highest_mileage: Option<FleetHighlight>,
    /// Sum of known purchase prices
    pub fleet_value: f64,
}

/// Minimal motorcycle card used in fleet highlights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetHighlight {
    pub id: MotorcycleId,
    pub name: String,
    pub year: i32,
    pub current_mileage: f64,
}
