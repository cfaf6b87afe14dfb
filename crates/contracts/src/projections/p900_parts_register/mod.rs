pub mod dto;
pub mod service;

pub use dto::{CategoryCost, PartsExpenseSummary, PartsFilter, PartsTotals, ReplacementNotice};
pub use service::{build_parts_expense_summary, build_parts_totals, parts_needing_replacement};
