use crate::domain::a001_motorcycle::MotorcycleId;
use serde::{Deserialize, Serialize};

/// Request to record a new odometer reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMileageRequest {
    pub motorcycle_id: MotorcycleId,

    /// New odometer value, km; must not be below the current one
    pub new_mileage: f64,
}
