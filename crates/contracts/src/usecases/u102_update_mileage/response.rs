use crate::domain::a001_motorcycle::MotorcycleId;
use serde::{Deserialize, Serialize};

/// Odometer update outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMileageResponse {
    pub motorcycle_id: MotorcycleId,
    pub previous_mileage: f64,
    pub current_mileage: f64,
}
