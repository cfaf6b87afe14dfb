use crate::dashboards::d400_maintenance_due::ClassifiedService;
use crate::domain::a001_motorcycle::Motorcycle;
use crate::domain::a002_maintenance_record::MaintenanceRecord;
use crate::projections::p900_parts_register::PartsTotals;
use serde::{Deserialize, Serialize};

/// Lifetime statistics shown on the motorcycle detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorcycleStatistics {
    pub age_years: i32,
    /// Days since purchase, zero when the purchase date is unknown
    pub ownership_days: i64,
    pub total_maintenance_cost: f64,
    pub total_parts_cost: f64,
    pub total_cost: f64,
    pub total_rides: usize,
    /// Logged ride distance, km
    pub total_distance: f64,
    pub avg_km_per_year: f64,
    pub avg_km_per_day: f64,
    pub maintenance_count: usize,
    pub parts_count: usize,
}

/// Full detail-page payload for one motorcycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorcycleOverview {
    pub motorcycle: Motorcycle,
    pub statistics: MotorcycleStatistics,
    /// Due services inside the look-ahead window, display-sorted
    pub upcoming: Vec<ClassifiedService>,
    /// Latest completed services, newest first
    pub recent_maintenance: Vec<MaintenanceRecord>,
    pub parts_summary: PartsTotals,
    /// Maintenance spend over the trailing year
    pub annual_maintenance_cost: f64,
    /// Services completed over the trailing year
    pub maintenance_frequency: usize,
}
