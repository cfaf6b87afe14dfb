use crate::domain::a002_maintenance_record::MaintenanceRecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of completing a batch of services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteServiceResponse {
    pub completed: Vec<CompletedServiceOutcome>,
    pub skipped: Vec<SkippedService>,
    pub message: String,
}

/// One completed record with its rolled-forward thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedServiceOutcome {
    pub record_id: MaintenanceRecordId,
    pub next_service_date: Option<NaiveDate>,
    pub next_service_mileage: Option<f64>,
}

/// A selected record that could not be completed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedService {
    pub record_id: MaintenanceRecordId,
    pub reason: String,
}
