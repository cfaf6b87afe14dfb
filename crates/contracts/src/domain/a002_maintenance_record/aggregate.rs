use crate::domain::common::{
    event_types, AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::domain::a001_motorcycle::MotorcycleId;
use crate::enums::ServiceType;
use crate::shared::date_utils::add_months;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a maintenance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceRecordId(pub i64);

impl MaintenanceRecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for MaintenanceRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(MaintenanceRecordId::new)
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A performed or scheduled maintenance service.
///
/// A completed record with service intervals doubles as the reminder for
/// the next service: `next_service_date` / `next_service_mileage` carry
/// the derived thresholds the due classifier works on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(flatten)]
    pub base: BaseAggregate<MaintenanceRecordId>,

    pub motorcycle_id: MotorcycleId,

    // Service details
    pub service_type: ServiceType,
    pub service_name: String,
    pub description: Option<String>,

    // Scheduling
    #[serde(with = "serde_date")]
    pub performed_at: NaiveDate,
    pub mileage_at_service: f64,

    // Next service thresholds
    pub next_service_mileage: Option<f64>,
    pub next_service_date: Option<NaiveDate>,
    pub service_interval_km: Option<f64>,
    pub service_interval_months: Option<i32>,

    // Cost tracking
    pub labor_cost: f64,
    pub parts_cost: f64,
    pub total_cost: f64,
    pub currency: String,

    // Service provider
    pub service_provider: Option<String>,
    pub technician: Option<String>,

    // Documentation
    pub receipt_path: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,

    // Status
    pub is_completed: bool,
    pub is_scheduled: bool,
}

impl MaintenanceRecord {
    /// Create a record with a known ID (IDs are assigned by the data layer)
    pub fn new_with_id(
        id: MaintenanceRecordId,
        motorcycle_id: MotorcycleId,
        service_type: ServiceType,
        service_name: String,
        performed_at: NaiveDate,
        mileage_at_service: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(id),
            motorcycle_id,
            service_type,
            service_name,
            description: None,
            performed_at,
            mileage_at_service,
            next_service_mileage: None,
            next_service_date: None,
            service_interval_km: None,
            service_interval_months: None,
            labor_cost: 0.0,
            parts_cost: 0.0,
            total_cost: 0.0,
            currency: "EUR".to_string(),
            service_provider: None,
            technician: None,
            receipt_path: None,
            photos: Vec::new(),
            is_completed: true,
            is_scheduled: false,
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

    /// Apply a create/update DTO and recompute the next-service thresholds
    pub fn update(&mut self, dto: &MaintenanceRecordDto) {
        self.service_type = dto.service_type;
        self.service_name = dto.service_name.clone();
        self.description = dto.description.clone();
        self.performed_at = dto.performed_at;
        self.mileage_at_service = dto.mileage_at_service;
        self.next_service_mileage = dto.next_service_mileage;
        self.next_service_date = dto.next_service_date;
        self.service_interval_km = dto.service_interval_km;
        self.service_interval_months = dto.service_interval_months;
        self.labor_cost = dto.labor_cost;
        self.parts_cost = dto.parts_cost;
        self.total_cost = dto.total_cost;
        if let Some(currency) = &dto.currency {
            self.currency = currency.clone();
        }
        self.service_provider = dto.service_provider.clone();
        self.technician = dto.technician.clone();
        self.is_completed = dto.is_completed;
        self.is_scheduled = dto.is_scheduled;
        self.apply_intervals();
    }

    /// Derive the next-service thresholds from the record's own intervals.
    ///
    /// Manually set thresholds are kept when the matching interval is absent.
    pub fn apply_intervals(&mut self) {
        if let Some(interval_km) = self.service_interval_km {
            self.next_service_mileage = Some(self.mileage_at_service + interval_km);
        }
        if let Some(months) = self.service_interval_months {
            if months > 0 {
                self.next_service_date = Some(add_months(self.performed_at, months as u32));
            }
        }
    }

    /// Next service date derived from a performed date and a month interval
    pub fn next_service_date_from(performed_at: NaiveDate, interval_months: u32) -> NaiveDate {
        add_months(performed_at, interval_months)
    }

    /// Next service mileage derived from a service mileage and a km interval
    pub fn next_service_mileage_from(mileage_at_service: f64, interval_km: f64) -> f64 {
        mileage_at_service + interval_km
    }

    /// Keep the total in sync with the labor/parts split
    pub fn recalculate_total(&mut self) {
        self.total_cost = self.labor_cost + self.parts_cost;
    }

    /// Mark the service as done and roll the thresholds forward.
    ///
    /// `odometer` is the motorcycle's current mileage at completion time.
    pub fn complete(&mut self, completed_at: NaiveDate, odometer: f64) {
        self.is_completed = true;
        self.is_scheduled = false;
        self.performed_at = completed_at;
        self.mileage_at_service = odometer;
        self.apply_intervals();
        self.touch_updated();
        self.base.events.record(
            event_types::SERVICE_COMPLETED,
            serde_json::json!({
                "id": self.base.id.value(),
                "motorcycle_id": self.motorcycle_id.value(),
                "service_name": self.service_name,
                "next_service_date": self.next_service_date,
                "next_service_mileage": self.next_service_mileage,
            }),
        );
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), String> {
        if self.service_name.trim().is_empty() {
            return Err("Service name cannot be empty".into());
        }
        if self.mileage_at_service < 0.0 {
            return Err("Mileage at service cannot be negative".into());
        }
        if self.labor_cost < 0.0 || self.parts_cost < 0.0 || self.total_cost < 0.0 {
            return Err("Costs cannot be negative".into());
        }
        if self.currency.trim().is_empty() {
            return Err("Currency cannot be empty".into());
        }
        if let Some(interval_km) = self.service_interval_km {
            if interval_km <= 0.0 {
                return Err("Service interval (km) must be positive".into());
            }
        }
        if let Some(months) = self.service_interval_months {
            if months <= 0 {
                return Err("Service interval (months) must be positive".into());
            }
        }
        Ok(())
    }

    /// Hook before persisting
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for MaintenanceRecord {
    type Id = MaintenanceRecordId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> &str {
        &self.service_name
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
        "a002"
    }

    fn collection_name() -> &'static str {
        "maintenance_record"
    }

    fn element_name() -> &'static str {
        "Maintenance record"
    }

    fn list_name() -> &'static str {
        "Maintenance records"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a maintenance record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecordDto {
    pub id: Option<i64>,
    pub motorcycle_id: i64,
    pub service_type: ServiceType,
    pub service_name: String,
    pub description: Option<String>,
    #[serde(with = "serde_date")]
    pub performed_at: NaiveDate,
    pub mileage_at_service: f64,
    pub next_service_mileage: Option<f64>,
    pub next_service_date: Option<NaiveDate>,
    pub service_interval_km: Option<f64>,
    pub service_interval_months: Option<i32>,
    #[serde(default)]
    pub labor_cost: f64,
    #[serde(default)]
    pub parts_cost: f64,
    #[serde(default)]
    pub total_cost: f64,
    pub currency: Option<String>,
    pub service_provider: Option<String>,
    pub technician: Option<String>,
    #[serde(default = "default_completed")]
    pub is_completed: bool,
    #[serde(default)]
    pub is_scheduled: bool,
}

fn default_completed() -> bool {
    true
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
