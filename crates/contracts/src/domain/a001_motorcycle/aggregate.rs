use crate::domain::common::{
    event_types, AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a motorcycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotorcycleId(pub i64);

impl MotorcycleId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for MotorcycleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(MotorcycleId::new)
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A motorcycle in the garage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motorcycle {
    #[serde(flatten)]
    pub base: BaseAggregate<MotorcycleId>,

    // Identity
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Engine displacement in cc
    pub engine_size: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,

    // Tracking
    /// Odometer reading in km
    pub current_mileage: f64,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,

    // Status
    pub is_active: bool,
    pub is_archived: bool,

    pub notes: Option<String>,
}

impl Motorcycle {
    /// Create a motorcycle with a known ID (IDs are assigned by the data layer)
    pub fn new_with_id(
        id: MotorcycleId,
        name: String,
        make: String,
        model: String,
        year: i32,
        current_mileage: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(id),
            name,
            make,
            model,
            year,
            engine_size: None,
            license_plate: None,
            vin: None,
            current_mileage,
            purchase_date: None,
            purchase_price: None,
            is_active: true,
            is_archived: false,
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

    /// Apply a create/update DTO
    pub fn update(&mut self, dto: &MotorcycleDto) {
        self.name = dto.name.clone();
        self.make = dto.make.clone();
        self.model = dto.model.clone();
        self.year = dto.year;
        self.engine_size = dto.engine_size;
        self.license_plate = dto.license_plate.clone();
        self.vin = dto.vin.clone();
        if let Some(mileage) = dto.current_mileage {
            self.current_mileage = mileage;
        }
        self.purchase_date = dto.purchase_date;
        self.purchase_price = dto.purchase_price;
        self.notes = dto.notes.clone();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if self.make.trim().is_empty() {
            return Err("Make cannot be empty".into());
        }
        if self.model.trim().is_empty() {
            return Err("Model cannot be empty".into());
        }
        if self.year < 1900 || self.year > 2100 {
            return Err("Year is out of range".into());
        }
        if self.current_mileage < 0.0 {
            return Err("Mileage cannot be negative".into());
        }
        if let Some(vin) = &self.vin {
            if !vin.trim().is_empty() && !is_valid_vin(vin) {
                return Err("VIN must be 17 characters (letters I, O, Q are not allowed)".into());
            }
        }
        if let Some(plate) = &self.license_plate {
            if !plate.trim().is_empty() && !is_valid_license_plate(plate) {
                return Err("License plate must be 2-10 letters, digits or dashes".into());
            }
        }
        if let Some(price) = self.purchase_price {
            if price < 0.0 {
                return Err("Purchase price cannot be negative".into());
            }
        }
        if let Some(cc) = self.engine_size {
            if cc <= 0 {
                return Err("Engine size must be positive".into());
            }
        }
        Ok(())
    }

    /// Archive the motorcycle (kept in history, hidden from the active fleet)
    pub fn archive(&mut self) {
        self.is_archived = true;
        self.is_active = false;
        self.touch_updated();
        self.base.events.record(
            event_types::MOTORCYCLE_ARCHIVED,
            serde_json::json!({ "id": self.base.id.value(), "name": self.name }),
        );
    }

    /// Restore an archived motorcycle to the active fleet
    pub fn restore(&mut self) {
        self.is_archived = false;
        self.is_active = true;
        self.touch_updated();
        self.base.events.record(
            event_types::MOTORCYCLE_RESTORED,
            serde_json::json!({ "id": self.base.id.value(), "name": self.name }),
        );
    }

    /// Update the odometer reading. The odometer only moves forward.
    pub fn update_mileage(&mut self, new_mileage: f64) -> Result<(), String> {
        if new_mileage < self.current_mileage {
            return Err("New mileage cannot be less than current mileage".into());
        }
        let previous = self.current_mileage;
        self.current_mileage = new_mileage;
        self.touch_updated();
        self.base.events.record(
            event_types::MILEAGE_UPDATED,
            serde_json::json!({
                "id": self.base.id.value(),
                "name": self.name,
                "previous_mileage": previous,
                "current_mileage": new_mileage,
            }),
        );
        Ok(())
    }

    /// Age in calendar years as of `today`
    pub fn age_years(&self, today: NaiveDate) -> i32 {
        today.year() - self.year
    }

    /// Days of ownership as of `today`, when the purchase date is known
    pub fn ownership_days(&self, today: NaiveDate) -> Option<i64> {
        self.purchase_date.map(|d| (today - d).num_days())
    }

    /// Hook before persisting
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Motorcycle {
    type Id = MotorcycleId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> &str {
        &self.name
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "motorcycle"
    }

    fn element_name() -> &'static str {
        "Motorcycle"
    }

    fn list_name() -> &'static str {
        "Motorcycles"
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

/// VIN check: exactly 17 letters or digits in either case,
/// letters I, O and Q excluded
pub fn is_valid_vin(vin: &str) -> bool {
    vin.len() == 17
        && vin.chars().all(|c| match c.to_ascii_uppercase() {
            'I' | 'O' | 'Q' => false,
            'A'..='Z' | '0'..='9' => true,
            _ => false,
        })
}

/// License plate check: 2-10 letters, digits or dashes, either case
pub fn is_valid_license_plate(plate: &str) -> bool {
    (2..=10).contains(&plate.len())
        && plate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a motorcycle
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MotorcycleDto {
    pub id: Option<i64>,
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub engine_size: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    #[serde(default)]
    pub current_mileage: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_motorcycle() -> Motorcycle {
        Motorcycle::new_with_id(
            MotorcycleId::new(1),
            "Daily".to_string(),
            "Honda".to_string(),
            "CB650R".to_string(),
            2021,
            12500.0,
        )
    }

    #[test]
    fn test_validate_ok() {
        let bike = test_motorcycle();
        assert!(bike.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut bike = test_motorcycle();
        bike.name = "  ".to_string();
        assert!(bike.validate().is_err());
    }

    #[test]
    fn test_vin_validation() {
        assert!(is_valid_vin("JH2RC6807MK100001"));
        assert!(is_valid_vin("jh2rc6807mk100001")); // case-insensitive
        assert!(!is_valid_vin("JH2RC6807MK10000")); // 16 chars
        assert!(!is_valid_vin("IH2RC6807MK100001")); // contains I
        assert!(!is_valid_vin("ih2rc6807mk100001")); // lowercase i still excluded
        assert!(!is_valid_vin("JH2RC6807MK10000!")); // punctuation
    }

    #[test]
    fn test_license_plate_validation() {
        assert!(is_valid_license_plate("M-AB-1234"));
        assert!(is_valid_license_plate("m-ab-1234")); // case-insensitive
        assert!(is_valid_license_plate("AB"));
        assert!(!is_valid_license_plate("A"));
        assert!(!is_valid_license_plate("ABCDEFGHIJK")); // 11 chars
        assert!(!is_valid_license_plate("AB 12")); // no spaces
    }

    #[test]
    fn test_update_mileage_only_moves_forward() {
        let mut bike = test_motorcycle();
        assert!(bike.update_mileage(13000.0).is_ok());
        assert_eq!(bike.current_mileage, 13000.0);
        assert!(bike.update_mileage(12999.0).is_err());
        assert_eq!(bike.current_mileage, 13000.0);

        let events = bike.base.events.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, event_types::MILEAGE_UPDATED);
    }

    #[test]
    fn test_update_mileage_accepts_same_value() {
        let mut bike = test_motorcycle();
        assert!(bike.update_mileage(12500.0).is_ok());
    }

    #[test]
    fn test_archive_and_restore() {
        let mut bike = test_motorcycle();
        bike.archive();
        assert!(bike.is_archived);
        assert!(!bike.is_active);
        bike.restore();
        assert!(!bike.is_archived);
        assert!(bike.is_active);
        assert_eq!(bike.base.events.len(), 2);
    }

    #[test]
    fn test_age_and_ownership() {
        let mut bike = test_motorcycle();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(bike.age_years(today), 4);
        assert_eq!(bike.ownership_days(today), None);
        bike.purchase_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        assert_eq!(bike.ownership_days(today), Some(14));
    }
}
