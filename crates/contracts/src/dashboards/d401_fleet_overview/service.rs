use super::dto::{ActivityEntry, DashboardStats, FleetHighlight, FleetSummary};
use crate::dashboards::d400_maintenance_due::{
    classify_all, due_within_window, summarize, ServiceSchedule, DEFAULT_WINDOW_DAYS,
};
use crate::domain::a001_motorcycle::{Motorcycle, MotorcycleId};
use crate::domain::a002_maintenance_record::MaintenanceRecord;
use crate::domain::a003_part::Part;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Trailing window for the monthly expense figure, days
pub const EXPENSE_WINDOW_DAYS: i64 = 30;
/// Number of rows in the recent-activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Assemble the landing-page dashboard from the full data set.
///
/// Service schedules are taken from records that carry a next-service
/// threshold and belong to an active, non-archived motorcycle. The due
/// window is [`DEFAULT_WINDOW_DAYS`] days.
pub fn build_dashboard_stats(
    motorcycles: &[Motorcycle],
    records: &[MaintenanceRecord],
    parts: &[Part],
    today: NaiveDate,
) -> DashboardStats {
    let total_motorcycles = motorcycles.len();
    let active: Vec<&Motorcycle> = motorcycles
        .iter()
        .filter(|m| m.is_active && !m.is_archived)
        .collect();
    let active_motorcycles = active.len();
    let total_mileage: f64 = active.iter().map(|m| m.current_mileage).sum();

    let by_id: HashMap<MotorcycleId, &Motorcycle> =
        motorcycles.iter().map(|m| (m.base.id, m)).collect();

    // === DUE SERVICES ===
    let schedules: Vec<ServiceSchedule> = records
        .iter()
        .filter_map(|record| {
            let motorcycle = by_id.get(&record.motorcycle_id)?;
            if !motorcycle.is_active || motorcycle.is_archived {
                return None;
            }
            ServiceSchedule::from_record(record, motorcycle)
        })
        .collect();
    let in_window = due_within_window(schedules, DEFAULT_WINDOW_DAYS, today);
    let summary = summarize(&classify_all(in_window, today));

    // === MONTHLY EXPENSES ===
    let cutoff = today - chrono::Duration::days(EXPENSE_WINDOW_DAYS);
    let maintenance_spend: f64 = records
        .iter()
        .filter(|record| record.is_completed && record.performed_at >= cutoff)
        .map(|record| record.total_cost)
        .sum();
    let parts_spend: f64 = parts
        .iter()
        .filter(|part| matches!(part.purchase_date, Some(date) if date >= cutoff))
        .map(|part| part.total_cost.unwrap_or(0.0))
        .sum();

    // === RECENT ACTIVITY ===
    let mut completed: Vec<&MaintenanceRecord> =
        records.iter().filter(|record| record.is_completed).collect();
    completed.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
    let recent_activities: Vec<ActivityEntry> = completed
        .iter()
        .filter_map(|record| {
            let motorcycle = by_id.get(&record.motorcycle_id)?;
            Some(ActivityEntry {
                id: record.base.id,
                kind: "maintenance".to_string(),
                motorcycle_id: motorcycle.base.id,
                motorcycle_name: motorcycle.name.clone(),
                service_type: record.service_type,
                description: record.service_name.clone(),
                performed_at: record.performed_at,
                mileage_at_service: record.mileage_at_service,
                total_cost: record.total_cost,
            })
        })
        .take(RECENT_ACTIVITY_LIMIT)
        .collect();

    DashboardStats {
        total_motorcycles,
        active_motorcycles,
        total_mileage,
        upcoming_services: summary.upcoming_count,
        overdue_services: summary.overdue_count,
        monthly_expenses: maintenance_spend + parts_spend,
        recent_activities,
    }
}

/// Roll the fleet up for the motorcycles page header. Archived motorcycles
/// are left out entirely.
pub fn build_fleet_summary(motorcycles: &[Motorcycle]) -> FleetSummary {
    let considered: Vec<&Motorcycle> = motorcycles.iter().filter(|m| !m.is_archived).collect();

    let total_motorcycles = considered.len();
    let total_mileage: f64 = considered.iter().map(|m| m.current_mileage).sum();
    let average_mileage = if total_motorcycles > 0 {
        total_mileage / total_motorcycles as f64
    } else {
        0.0
    };

    let newest_motorcycle = considered
        .iter()
        .max_by_key(|m| m.year)
        .map(|m| highlight(m));
    let highest_mileage = considered
        .iter()
        .max_by(|a, b| {
            a.current_mileage
                .partial_cmp(&b.current_mileage)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|m| highlight(m));

    let fleet_value: f64 = considered
        .iter()
        .map(|m| m.purchase_price.unwrap_or(0.0))
        .sum();

    FleetSummary {
        total_motorcycles,
        total_mileage,
        average_mileage,
        newest_motorcycle,
        highest_mileage,
        fleet_value,
    }
}

fn highlight(motorcycle: &Motorcycle) -> FleetHighlight {
    FleetHighlight {
        id: motorcycle.base.id,
        name: motorcycle.name.clone(),
        year: motorcycle.year,
        current_mileage: motorcycle.current_mileage,
    }
}
