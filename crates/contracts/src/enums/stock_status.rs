use serde::{Deserialize, Serialize};

/// Quantity at or below which a part counts as low stock
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Stock level classification for a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Classify a stock quantity against a low-stock threshold
    pub fn from_quantity(quantity: i32, threshold: i32) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// All statuses
    pub fn all() -> Vec<StockStatus> {
        vec![StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in_stock" => Some(StockStatus::InStock),
            "low_stock" => Some(StockStatus::LowStock),
            "out_of_stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_quantity_boundaries() {
        assert_eq!(StockStatus::from_quantity(0, LOW_STOCK_THRESHOLD), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(-1, LOW_STOCK_THRESHOLD), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(1, LOW_STOCK_THRESHOLD), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(5, LOW_STOCK_THRESHOLD), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(6, LOW_STOCK_THRESHOLD), StockStatus::InStock);
    }
}
