use crate::domain::a001_motorcycle::MotorcycleId;
use crate::domain::a002_maintenance_record::MaintenanceRecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to close out one or more scheduled services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteServiceRequest {
    /// Records to complete; must not be empty
    pub maintenance_ids: Vec<MaintenanceRecordId>,

    /// Day the work was done
    pub completed_at: NaiveDate,

    /// Odometer readings taken at completion, one per motorcycle involved
    #[serde(default)]
    pub odometer_readings: Vec<OdometerReading>,
}

/// Odometer reading for one motorcycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdometerReading {
    pub motorcycle_id: MotorcycleId,
    pub mileage: f64,
}
