pub mod dto;
pub mod service;

pub use dto::{EfficiencyPoint, FuelStatistics, RideFilter, RideTotals};
pub use service::{build_fuel_statistics, build_ride_totals};
