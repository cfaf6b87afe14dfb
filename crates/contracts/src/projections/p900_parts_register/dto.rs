use crate::dashboards::d400_maintenance_due::OverdueStatus;
use crate::domain::a001_motorcycle::MotorcycleId;
use crate::domain::a003_part::PartId;
use crate::enums::{Priority, StockStatus};
use serde::{Deserialize, Serialize};

/// Query intent for the parts register. Every arm is optional; an absent
/// arm passes all rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartsFilter {
    pub motorcycle_id: Option<MotorcycleId>,
    /// Exact category match; parts without a category never match it
    pub category: Option<String>,
    pub stock: Option<StockStatus>,
    /// Case-insensitive substring over name, part number and manufacturer
    pub search: Option<String>,
}

/// Stock rollup for the parts page header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartsTotals {
    pub total_parts: usize,
    pub total_stock_value: f64,
    /// Parts in stock but at or under the low-stock threshold
    pub low_stock_count: usize,
    /// Distinct non-empty categories
    pub categories_count: usize,
}

/// Spend breakdown over a part selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartsExpenseSummary {
    pub total_cost: f64,
    pub total_parts: usize,
    pub total_stock_value: f64,
    pub average_part_cost: f64,
    /// Per-category spend, sorted by category name
    pub category_breakdown: Vec<CategoryCost>,
}

/// One category row in the expense breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCost {
    pub category: String,
    pub total: f64,
}

/// Replacement reminder derived from an installed part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementNotice {
    pub part_id: PartId,
    pub part_name: String,
    pub motorcycle_id: MotorcycleId,
    #[serde(flatten)]
    pub status: OverdueStatus,
    pub priority: Priority,
    pub reason: String,
}
