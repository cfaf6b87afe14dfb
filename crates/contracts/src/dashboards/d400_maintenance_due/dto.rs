use crate::domain::a001_motorcycle::{Motorcycle, MotorcycleId};
use crate::domain::a002_maintenance_record::{MaintenanceRecord, MaintenanceRecordId};
use crate::enums::{Priority, ServiceType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A service reminder as the due classifier consumes it.
///
/// Either threshold may be absent; an absent axis is simply not checked.
/// `current_mileage` is the odometer snapshot of the owning motorcycle,
/// denormalized onto the row by the data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSchedule {
    pub id: MaintenanceRecordId,
    pub motorcycle_id: MotorcycleId,
    pub motorcycle_name: String,
    pub service_type: ServiceType,
    pub service_name: String,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: Option<f64>,
    pub current_mileage: Option<f64>,
}

impl ServiceSchedule {
    /// Build a schedule row from a maintenance record and its motorcycle.
    ///
    /// Returns `None` when the record carries no next-service threshold at
    /// all; such records have nothing to classify against.
    pub fn from_record(record: &MaintenanceRecord, motorcycle: &Motorcycle) -> Option<Self> {
        if record.next_service_date.is_none() && record.next_service_mileage.is_none() {
            return None;
        }
        Some(Self {
            id: record.base.id,
            motorcycle_id: motorcycle.base.id,
            motorcycle_name: motorcycle.name.clone(),
            service_type: record.service_type,
            service_name: record.service_name.clone(),
            due_date: record.next_service_date,
            due_mileage: record.next_service_mileage,
            current_mileage: Some(motorcycle.current_mileage),
        })
    }
}

/// Overdue evaluation of one schedule row. Derived data, recomputed on
/// every evaluation and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverdueStatus {
    pub is_overdue: bool,
    /// Whole days past the due date, at least 1 when set
    pub days_overdue: Option<i64>,
    /// Kilometers past the due mileage, zero or more when set
    pub mileage_overdue: Option<f64>,
}

/// A schedule row with its overdue evaluation and priority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedService {
    #[serde(flatten)]
    pub schedule: ServiceSchedule,
    #[serde(flatten)]
    pub status: OverdueStatus,
    pub priority: Priority,
}

/// Counts over a classified list for dashboard tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueSummary {
    pub total: usize,
    /// Services already past a threshold
    pub overdue_count: usize,
    /// Services not yet overdue
    pub upcoming_count: usize,
    /// High-priority services that are not overdue
    pub urgent_count: usize,
}
