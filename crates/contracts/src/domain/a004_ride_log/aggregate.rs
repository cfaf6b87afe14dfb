use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::domain::a001_motorcycle::MotorcycleId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a ride log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RideLogId(pub i64);

impl RideLogId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for RideLogId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(RideLogId::new)
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A logged ride with odometer readings and fuel tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideLog {
    #[serde(flatten)]
    pub base: BaseAggregate<RideLogId>,

    pub motorcycle_id: MotorcycleId,

    // Trip details
    #[serde(with = "serde_date")]
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_mileage: f64,
    pub end_mileage: Option<f64>,
    /// Ridden distance in km, derived or entered manually
    pub distance: Option<f64>,

    // Fuel tracking
    /// Fuel used in liters
    pub fuel_consumed: Option<f64>,
    pub fuel_cost: Option<f64>,
    /// Derived efficiency in km per liter
    pub fuel_efficiency: Option<f64>,

    // Location
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub route_description: Option<String>,

    // Conditions
    pub weather_conditions: Option<String>,
    pub road_conditions: Option<String>,

    /// Commute, Recreation, Touring, ...
    pub trip_type: Option<String>,
    pub notes: Option<String>,
}

impl RideLog {
    /// Create a ride log with a known ID (IDs are assigned by the data layer)
    pub fn new_with_id(
        id: RideLogId,
        motorcycle_id: MotorcycleId,
        start_date: NaiveDate,
        start_mileage: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(id),
            motorcycle_id,
            start_date,
            end_date: None,
            start_mileage,
            end_mileage: None,
            distance: None,
            fuel_consumed: None,
            fuel_cost: None,
            fuel_efficiency: None,
            start_location: None,
            end_location: None,
            route_description: None,
            weather_conditions: None,
            road_conditions: None,
            trip_type: None,
            notes: None,
        }
    }

    /// Record ID as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Refresh the update timestamp
    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Apply a create/update DTO and rederive the computed metrics
    pub fn update(&mut self, dto: &RideLogDto) {
        self.start_date = dto.start_date;
        self.end_date = dto.end_date;
        self.start_mileage = dto.start_mileage;
        self.end_mileage = dto.end_mileage;
        self.distance = dto.distance;
        self.fuel_consumed = dto.fuel_consumed;
        self.fuel_cost = dto.fuel_cost;
        self.start_location = dto.start_location.clone();
        self.end_location = dto.end_location.clone();
        self.route_description = dto.route_description.clone();
        self.weather_conditions = dto.weather_conditions.clone();
        self.road_conditions = dto.road_conditions.clone();
        self.trip_type = dto.trip_type.clone();
        self.notes = dto.notes.clone();
        self.derive_metrics();
    }

    /// Derive distance and fuel efficiency from the odometer readings.
    ///
    /// A manually entered distance is kept when the ride has no end
    /// reading yet.
    pub fn derive_metrics(&mut self) {
        if let Some(end_mileage) = self.end_mileage {
            self.distance = Some(end_mileage - self.start_mileage);
        }
        self.fuel_efficiency = match (self.distance, self.fuel_consumed) {
            (Some(distance), Some(fuel)) if fuel > 0.0 => Some(distance / fuel),
            _ => None,
        };
    }

    /// Odometer value for the motorcycle after this ride.
    ///
    /// The odometer is only bumped when the ride ended past it.
    pub fn mileage_after_ride(&self, current_mileage: f64) -> f64 {
        match self.end_mileage {
            Some(end_mileage) if end_mileage > current_mileage => end_mileage,
            _ => current_mileage,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), String> {
        if self.start_mileage < 0.0 {
            return Err("Start mileage cannot be negative".into());
        }
        if let Some(end_mileage) = self.end_mileage {
            if end_mileage < self.start_mileage {
                return Err("End mileage cannot be less than start mileage".into());
            }
        }
        if let Some(end_date) = self.end_date {
            if end_date < self.start_date {
                return Err("End date cannot be before start date".into());
            }
        }
        if let Some(fuel) = self.fuel_consumed {
            if fuel < 0.0 {
                return Err("Fuel consumed cannot be negative".into());
            }
        }
        if let Some(cost) = self.fuel_cost {
            if cost < 0.0 {
                return Err("Fuel cost cannot be negative".into());
            }
        }
        Ok(())
    }

    /// Hook before persisting
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for RideLog {
    type Id = RideLogId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> &str {
        self.trip_type.as_deref().unwrap_or("Ride")
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "ride_log"
    }

    fn element_name() -> &'static str {
        "Ride log"
    }

    fn list_name() -> &'static str {
        "Ride logs"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a ride log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideLogDto {
    pub id: Option<i64>,
    pub motorcycle_id: i64,
    #[serde(with = "serde_date")]
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_mileage: f64,
    pub end_mileage: Option<f64>,
    pub distance: Option<f64>,
    pub fuel_consumed: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub route_description: Option<String>,
    pub weather_conditions: Option<String>,
    pub road_conditions: Option<String>,
    pub trip_type: Option<String>,
    pub notes: Option<String>,
}

// Local serde helper for NaiveDate as YYYY-MM-DD
mod serde_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.format(FORMAT).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ride() -> RideLog {
        RideLog::new_with_id(
            RideLogId::new(1),
            MotorcycleId::new(1),
            NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
            12000.0,
        )
    }

    #[test]
    fn test_derive_metrics() {
        let mut ride = test_ride();
        ride.end_mileage = Some(12180.0);
        ride.fuel_consumed = Some(9.0);
        ride.derive_metrics();
        assert_eq!(ride.distance, Some(180.0));
        assert_eq!(ride.fuel_efficiency, Some(20.0));
    }

    #[test]
    fn test_derive_metrics_without_fuel() {
        let mut ride = test_ride();
        ride.end_mileage = Some(12100.0);
        ride.derive_metrics();
        assert_eq!(ride.distance, Some(100.0));
        assert_eq!(ride.fuel_efficiency, None);
    }

    #[test]
    fn test_derive_metrics_zero_fuel() {
        let mut ride = test_ride();
        ride.end_mileage = Some(12100.0);
        ride.fuel_consumed = Some(0.0);
        ride.derive_metrics();
        assert_eq!(ride.fuel_efficiency, None);
    }

    #[test]
    fn test_derive_metrics_keeps_manual_distance_for_open_ride() {
        let mut ride = test_ride();
        ride.distance = Some(42.0);
        ride.derive_metrics();
        assert_eq!(ride.distance, Some(42.0));
    }

    #[test]
    fn test_mileage_after_ride() {
        let mut ride = test_ride();
        assert_eq!(ride.mileage_after_ride(12500.0), 12500.0);
        ride.end_mileage = Some(12480.0);
        assert_eq!(ride.mileage_after_ride(12500.0), 12500.0);
        ride.end_mileage = Some(12620.0);
        assert_eq!(ride.mileage_after_ride(12500.0), 12620.0);
    }

    #[test]
    fn test_validate_end_before_start() {
        let mut ride = test_ride();
        ride.end_mileage = Some(11000.0);
        assert!(ride.validate().is_err());
        ride.end_mileage = Some(12100.0);
        ride.end_date = NaiveDate::from_ymd_opt(2025, 4, 11);
        assert!(ride.validate().is_err());
    }
}
