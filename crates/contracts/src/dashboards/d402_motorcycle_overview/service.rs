use super::dto::{MotorcycleOverview, MotorcycleStatistics};
use crate::dashboards::d400_maintenance_due::{
    classify_all, due_within_window, sort_for_display, ServiceSchedule, DEFAULT_WINDOW_DAYS,
};
use crate::domain::a001_motorcycle::Motorcycle;
use crate::domain::a002_maintenance_record::MaintenanceRecord;
use crate::domain::a003_part::Part;
use crate::domain::a004_ride_log::RideLog;
use crate::projections::p900_parts_register::build_parts_totals;
use chrono::NaiveDate;

/// Rows in the detail-page maintenance feed
pub const RECENT_MAINTENANCE_LIMIT: usize = 5;
/// Trailing window for the annual cost figure, days
pub const ANNUAL_WINDOW_DAYS: i64 = 365;

/// Lifetime statistics for one motorcycle. Input lists may span the whole
/// fleet; rows of other motorcycles are ignored.
pub fn build_motorcycle_statistics(
    motorcycle: &Motorcycle,
    records: &[MaintenanceRecord],
    parts: &[Part],
    rides: &[RideLog],
    today: NaiveDate,
) -> MotorcycleStatistics {
    let own_records: Vec<&MaintenanceRecord> = records
        .iter()
        .filter(|record| record.motorcycle_id == motorcycle.base.id)
        .collect();
    let own_parts: Vec<&Part> = parts
        .iter()
        .filter(|part| part.motorcycle_id == motorcycle.base.id)
        .collect();
    let own_rides: Vec<&RideLog> = rides
        .iter()
        .filter(|ride| ride.motorcycle_id == motorcycle.base.id)
        .collect();

    let age_years = motorcycle.age_years(today);
    let ownership_days = motorcycle.ownership_days(today).unwrap_or(0);

    let total_maintenance_cost: f64 = own_records.iter().map(|record| record.total_cost).sum();
    let total_parts_cost: f64 = own_parts
        .iter()
        .map(|part| part.total_cost.unwrap_or(0.0))
        .sum();
    let total_distance: f64 = own_rides
        .iter()
        .map(|ride| ride.distance.unwrap_or(0.0))
        .sum();

    let avg_km_per_year = if age_years > 0 {
        motorcycle.current_mileage / age_years as f64
    } else {
        0.0
    };
    let avg_km_per_day = if ownership_days > 0 {
        motorcycle.current_mileage / ownership_days as f64
    } else {
        0.0
    };

    MotorcycleStatistics {
        age_years,
        ownership_days,
        total_maintenance_cost,
        total_parts_cost,
        total_cost: total_maintenance_cost + total_parts_cost,
        total_rides: own_rides.len(),
        total_distance,
        avg_km_per_year,
        avg_km_per_day,
        maintenance_count: own_records.len(),
        parts_count: own_parts.len(),
    }
}

/// Assemble the detail-page payload for one motorcycle
pub fn build_motorcycle_overview(
    motorcycle: &Motorcycle,
    records: &[MaintenanceRecord],
    parts: &[Part],
    rides: &[RideLog],
    today: NaiveDate,
) -> MotorcycleOverview {
    let statistics = build_motorcycle_statistics(motorcycle, records, parts, rides, today);

    let own_records: Vec<&MaintenanceRecord> = records
        .iter()
        .filter(|record| record.motorcycle_id == motorcycle.base.id)
        .collect();

    let schedules: Vec<ServiceSchedule> = own_records
        .iter()
        .filter_map(|record| ServiceSchedule::from_record(record, motorcycle))
        .collect();
    let mut upcoming = classify_all(
        due_within_window(schedules, DEFAULT_WINDOW_DAYS, today),
        today,
    );
    sort_for_display(&mut upcoming);

    let mut completed: Vec<&MaintenanceRecord> = own_records
        .iter()
        .copied()
        .filter(|record| record.is_completed)
        .collect();
    completed.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
    let recent_maintenance: Vec<MaintenanceRecord> = completed
        .iter()
        .take(RECENT_MAINTENANCE_LIMIT)
        .map(|record| (*record).clone())
        .collect();

    let own_parts: Vec<Part> = parts
        .iter()
        .filter(|part| part.motorcycle_id == motorcycle.base.id)
        .cloned()
        .collect();
    let parts_summary = build_parts_totals(&own_parts);

    let annual_cutoff = today - chrono::Duration::days(ANNUAL_WINDOW_DAYS);
    let mut annual_maintenance_cost = 0.0;
    let mut maintenance_frequency = 0;
    for record in &completed {
        if record.performed_at >= annual_cutoff {
            annual_maintenance_cost += record.total_cost;
            maintenance_frequency += 1;
        }
    }

    MotorcycleOverview {
        motorcycle: motorcycle.clone(),
        statistics,
        upcoming,
        recent_maintenance,
        parts_summary,
        annual_maintenance_cost,
        maintenance_frequency,
    }
}
