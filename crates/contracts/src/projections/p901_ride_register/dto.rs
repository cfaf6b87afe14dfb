use crate::domain::a001_motorcycle::MotorcycleId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query intent for the ride register. Date arms bound the ride's start
/// date, both ends inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RideFilter {
    pub motorcycle_id: Option<MotorcycleId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Ride summary for the logs page header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideTotals {
    pub total_rides: usize,
    /// Logged distance, km
    pub total_distance: f64,
    /// Fuel consumed, liters
    pub total_fuel: f64,
    pub total_fuel_cost: f64,
    /// Mean efficiency over rides that carry a positive one, km per liter
    pub average_efficiency: f64,
    pub most_common_trip_type: Option<String>,
}

/// One ride's efficiency with the context shown next to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyPoint {
    /// km per liter
    pub value: f64,
    pub date: NaiveDate,
    pub trip_type: Option<String>,
}

/// Fuel consumption summary over rides that actually burned fuel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuelStatistics {
    /// Liters
    pub total_fuel_consumed: f64,
    pub total_fuel_cost: f64,
    /// Mean of each fill's own cost per liter, not the ratio of the totals
    pub average_price_per_liter: f64,
    pub best_efficiency: Option<EfficiencyPoint>,
    pub worst_efficiency: Option<EfficiencyPoint>,
    pub average_efficiency: f64,
}
