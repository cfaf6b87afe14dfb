use crate::domain::common::{
    event_types, AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::domain::a001_motorcycle::MotorcycleId;
use crate::enums::{StockStatus, LOW_STOCK_THRESHOLD};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartId(pub i64);

impl PartId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for PartId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(PartId::new)
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A spare part or consumable tracked for a motorcycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(flatten)]
    pub base: BaseAggregate<PartId>,

    pub motorcycle_id: MotorcycleId,

    // Part details
    pub name: String,
    pub part_number: Option<String>,
    pub manufacturer: Option<String>,
    /// Free-form category (Engine, Brakes, Electrical, ...)
    pub category: Option<String>,

    // Inventory
    pub quantity_in_stock: i32,
    pub quantity_used: i32,
    pub unit_price: Option<f64>,
    pub total_cost: Option<f64>,
    pub currency: String,

    // Purchase info
    pub purchase_date: Option<NaiveDate>,
    pub vendor: Option<String>,

    // Installation
    pub installed_date: Option<NaiveDate>,
    pub installed_mileage: Option<f64>,
    pub replacement_interval_km: Option<f64>,
    pub replacement_interval_months: Option<i32>,

    // Documentation
    pub receipt_path: Option<String>,
    pub installation_notes: Option<String>,

    // Status
    pub is_installed: bool,
    pub is_consumable: bool,
}

impl Part {
    /// Create a part with a known ID (IDs are assigned by the data layer)
    pub fn new_with_id(id: PartId, motorcycle_id: MotorcycleId, name: String) -> Self {
        Self {
            base: BaseAggregate::new(id),
            motorcycle_id,
            name,
            part_number: None,
            manufacturer: None,
            category: None,
            quantity_in_stock: 0,
            quantity_used: 0,
            unit_price: None,
            total_cost: None,
            currency: "EUR".to_string(),
            purchase_date: None,
            vendor: None,
            installed_date: None,
            installed_mileage: None,
            replacement_interval_km: None,
            replacement_interval_months: None,
            receipt_path: None,
            installation_notes: None,
            is_installed: false,
            is_consumable: false,
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
    pub fn update(&mut self, dto: &PartDto) {
        self.name = dto.name.clone();
        self.part_number = dto.part_number.clone();
        self.manufacturer = dto.manufacturer.clone();
        self.category = dto.category.clone();
        self.quantity_in_stock = dto.quantity_in_stock;
        self.quantity_used = dto.quantity_used;
        self.unit_price = dto.unit_price;
        self.total_cost = dto.total_cost;
        if let Some(currency) = &dto.currency {
            self.currency = currency.clone();
        }
        self.purchase_date = dto.purchase_date;
        self.vendor = dto.vendor.clone();
        self.installed_date = dto.installed_date;
        self.installed_mileage = dto.installed_mileage;
        self.replacement_interval_km = dto.replacement_interval_km;
        self.replacement_interval_months = dto.replacement_interval_months;
        self.installation_notes = dto.installation_notes.clone();
        self.is_installed = dto.is_installed;
        self.is_consumable = dto.is_consumable;
    }

    /// Take `quantity` items from stock.
    ///
    /// Fails when the stock does not cover the requested quantity; the
    /// record is left unchanged in that case.
    pub fn use_stock(&mut self, quantity: i32) -> Result<(), String> {
        if quantity <= 0 {
            return Err("Quantity must be positive".into());
        }
        if self.quantity_in_stock < quantity {
            return Err("Insufficient stock".into());
        }
        self.quantity_in_stock -= quantity;
        self.quantity_used += quantity;
        self.touch_updated();
        self.base.events.record(
            event_types::PART_STOCK_USED,
            serde_json::json!({
                "id": self.base.id.value(),
                "name": self.name,
                "quantity": quantity,
                "quantity_in_stock": self.quantity_in_stock,
            }),
        );
        if self.quantity_in_stock <= LOW_STOCK_THRESHOLD {
            self.base.events.record(
                event_types::PART_LOW_STOCK,
                serde_json::json!({
                    "id": self.base.id.value(),
                    "name": self.name,
                    "quantity_in_stock": self.quantity_in_stock,
                }),
            );
        }
        Ok(())
    }

    /// Add `quantity` items to stock, optionally at a new unit price.
    ///
    /// A given price updates the unit price and adds the purchase to the
    /// accumulated total cost.
    pub fn restock(&mut self, quantity: i32, unit_price: Option<f64>) -> Result<(), String> {
        if quantity <= 0 {
            return Err("Quantity must be positive".into());
        }
        self.quantity_in_stock += quantity;
        if let Some(price) = unit_price {
            self.unit_price = Some(price);
            self.total_cost = Some(self.total_cost.unwrap_or(0.0) + quantity as f64 * price);
        }
        self.touch_updated();
        self.base.events.record(
            event_types::PART_RESTOCKED,
            serde_json::json!({
                "id": self.base.id.value(),
                "name": self.name,
                "quantity": quantity,
                "quantity_in_stock": self.quantity_in_stock,
            }),
        );
        Ok(())
    }

    /// Current stock classification
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity_in_stock, LOW_STOCK_THRESHOLD)
    }

    /// Value of the items currently in stock
    pub fn stock_value(&self) -> f64 {
        self.unit_price.unwrap_or(0.0) * self.quantity_in_stock as f64
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if self.quantity_in_stock < 0 || self.quantity_used < 0 {
            return Err("Quantities cannot be negative".into());
        }
        if let Some(price) = self.unit_price {
            if price < 0.0 {
                return Err("Unit price cannot be negative".into());
            }
        }
        if let Some(cost) = self.total_cost {
            if cost < 0.0 {
                return Err("Total cost cannot be negative".into());
            }
        }
        if let Some(interval_km) = self.replacement_interval_km {
            if interval_km <= 0.0 {
                return Err("Replacement interval (km) must be positive".into());
            }
        }
        if let Some(months) = self.replacement_interval_months {
            if months <= 0 {
                return Err("Replacement interval (months) must be positive".into());
            }
        }
        Ok(())
    }

    /// Hook before persisting
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Part {
    type Id = PartId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "part"
    }

    fn element_name() -> &'static str {
        "Part"
    }

    fn list_name() -> &'static str {
        "Parts"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a part
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PartDto {
    pub id: Option<i64>,
    pub motorcycle_id: i64,
    pub name: String,
    pub part_number: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub quantity_in_stock: i32,
    #[serde(default)]
    pub quantity_used: i32,
    pub unit_price: Option<f64>,
    pub total_cost: Option<f64>,
    pub currency: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub installed_date: Option<NaiveDate>,
    pub installed_mileage: Option<f64>,
    pub replacement_interval_km: Option<f64>,
    pub replacement_interval_months: Option<i32>,
    pub installation_notes: Option<String>,
    #[serde(default)]
    pub is_installed: bool,
    #[serde(default)]
    pub is_consumable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_part() -> Part {
        let mut part = Part::new_with_id(PartId::new(1), MotorcycleId::new(1), "Oil filter".to_string());
        part.quantity_in_stock = 10;
        part.unit_price = Some(12.5);
        part
    }

    #[test]
    fn test_use_stock() {
        let mut part = test_part();
        assert!(part.use_stock(3).is_ok());
        assert_eq!(part.quantity_in_stock, 7);
        assert_eq!(part.quantity_used, 3);
    }

    #[test]
    fn test_use_stock_insufficient() {
        let mut part = test_part();
        assert_eq!(part.use_stock(11), Err("Insufficient stock".to_string()));
        assert_eq!(part.quantity_in_stock, 10);
        assert_eq!(part.quantity_used, 0);
        assert!(part.base.events.is_empty());
    }

    #[test]
    fn test_use_stock_emits_low_stock_event() {
        let mut part = test_part();
        assert!(part.use_stock(6).is_ok());
        let events = part.base.events.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, event_types::PART_STOCK_USED);
        assert_eq!(events[1].event_type, event_types::PART_LOW_STOCK);
    }

    #[test]
    fn test_restock_updates_price_and_cost() {
        let mut part = test_part();
        part.total_cost = Some(125.0);
        assert!(part.restock(4, Some(13.0)).is_ok());
        assert_eq!(part.quantity_in_stock, 14);
        assert_eq!(part.unit_price, Some(13.0));
        assert_eq!(part.total_cost, Some(177.0));
    }

    #[test]
    fn test_restock_without_price_keeps_cost() {
        let mut part = test_part();
        assert!(part.restock(2, None).is_ok());
        assert_eq!(part.quantity_in_stock, 12);
        assert_eq!(part.unit_price, Some(12.5));
        assert_eq!(part.total_cost, None);
    }

    #[test]
    fn test_stock_status_and_value() {
        let mut part = test_part();
        assert_eq!(part.stock_status(), StockStatus::InStock);
        assert_eq!(part.stock_value(), 125.0);
        part.quantity_in_stock = 2;
        assert_eq!(part.stock_status(), StockStatus::LowStock);
        part.quantity_in_stock = 0;
        assert_eq!(part.stock_status(), StockStatus::OutOfStock);
    }
}
