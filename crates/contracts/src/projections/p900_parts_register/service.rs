use super::dto::{CategoryCost, PartsExpenseSummary, PartsFilter, PartsTotals, ReplacementNotice};
use crate::dashboards::d400_maintenance_due::{assign_priority, classify_overdue, overdue_text};
use crate::domain::a001_motorcycle::{Motorcycle, MotorcycleId};
use crate::domain::a003_part::Part;
use crate::enums::{Priority, StockStatus};
use crate::shared::date_utils::add_months;
use crate::shared::list_utils::{field_contains, Searchable};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

impl Searchable for Part {
    fn matches_filter(&self, query: &str) -> bool {
        field_contains(Some(self.name.as_str()), query)
            || field_contains(self.part_number.as_deref(), query)
            || field_contains(self.manufacturer.as_deref(), query)
    }
}

impl PartsFilter {
    /// All arms must pass; absent arms pass everything
    pub fn matches(&self, part: &Part) -> bool {
        if let Some(motorcycle_id) = self.motorcycle_id {
            if part.motorcycle_id != motorcycle_id {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if part.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(stock) = self.stock {
            if part.stock_status() != stock {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !search.trim().is_empty() && !part.matches_filter(search) {
                return false;
            }
        }
        true
    }

    /// Keep matching parts in their incoming order
    pub fn apply(&self, parts: &[Part]) -> Vec<Part> {
        parts
            .iter()
            .filter(|part| self.matches(part))
            .cloned()
            .collect()
    }
}

/// Stock rollup over a part list
pub fn build_parts_totals(parts: &[Part]) -> PartsTotals {
    let total_stock_value: f64 = parts.iter().map(|part| part.stock_value()).sum();
    let low_stock_count = parts
        .iter()
        .filter(|part| part.stock_status() == StockStatus::LowStock)
        .count();
    let categories: HashSet<&str> = parts
        .iter()
        .filter_map(|part| part.category.as_deref())
        .filter(|category| !category.trim().is_empty())
        .collect();

    PartsTotals {
        total_parts: parts.len(),
        total_stock_value,
        low_stock_count,
        categories_count: categories.len(),
    }
}

/// Spend summary over parts, optionally narrowed to one motorcycle and a
/// purchase-date range. A part without a purchase date drops out of any
/// date-bounded selection.
pub fn build_parts_expense_summary(
    parts: &[Part],
    motorcycle_id: Option<MotorcycleId>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> PartsExpenseSummary {
    let selection: Vec<&Part> = parts
        .iter()
        .filter(|part| match motorcycle_id {
            Some(id) => part.motorcycle_id == id,
            None => true,
        })
        .filter(|part| match from {
            Some(from) => matches!(part.purchase_date, Some(date) if date >= from),
            None => true,
        })
        .filter(|part| match to {
            Some(to) => matches!(part.purchase_date, Some(date) if date <= to),
            None => true,
        })
        .collect();

    let total_cost: f64 = selection
        .iter()
        .map(|part| part.total_cost.unwrap_or(0.0))
        .sum();
    let total_parts = selection.len();
    let total_stock_value: f64 = selection.iter().map(|part| part.stock_value()).sum();
    let average_part_cost = if total_parts > 0 {
        total_cost / total_parts as f64
    } else {
        0.0
    };

    let mut by_category: HashMap<String, f64> = HashMap::new();
    for part in &selection {
        let category = part
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or("Uncategorized")
            .to_string();
        *by_category.entry(category).or_insert(0.0) += part.total_cost.unwrap_or(0.0);
    }
    let mut category_breakdown: Vec<CategoryCost> = by_category
        .into_iter()
        .map(|(category, total)| CategoryCost { category, total })
        .collect();
    category_breakdown.sort_by(|a, b| a.category.cmp(&b.category));

    PartsExpenseSummary {
        total_cost,
        total_parts,
        total_stock_value,
        average_part_cost,
        category_breakdown,
    }
}

/// Replacement reminders for installed parts with a replacement interval.
///
/// Each part's due point is projected from its installation: mileage
/// interval on top of the installed mileage, month interval on top of the
/// installed date. The odometer comes from the owning motorcycle, so a
/// part whose motorcycle is missing from the list skips the mileage axis.
/// Parts overdue or close on either axis produce a notice.
pub fn parts_needing_replacement(
    parts: &[Part],
    motorcycles: &[Motorcycle],
    today: NaiveDate,
) -> Vec<ReplacementNotice> {
    let by_id: HashMap<MotorcycleId, &Motorcycle> =
        motorcycles.iter().map(|m| (m.base.id, m)).collect();

    let mut notices = Vec::new();
    for part in parts {
        if !part.is_installed {
            continue;
        }
        if part.replacement_interval_km.is_none() && part.replacement_interval_months.is_none() {
            continue;
        }

        let due_mileage = match (part.installed_mileage, part.replacement_interval_km) {
            (Some(at_install), Some(interval)) => Some(at_install + interval),
            _ => None,
        };
        let due_date = match (part.installed_date, part.replacement_interval_months) {
            (Some(installed), Some(months)) if months > 0 => {
                Some(add_months(installed, months as u32))
            }
            _ => None,
        };
        if due_mileage.is_none() && due_date.is_none() {
            continue;
        }

        let current_mileage = by_id
            .get(&part.motorcycle_id)
            .map(|motorcycle| motorcycle.current_mileage);

        let status = classify_overdue(due_date, due_mileage, current_mileage, today);
        let priority = assign_priority(&status, due_date, due_mileage, current_mileage, today);
        if !status.is_overdue && priority != Priority::Medium {
            continue;
        }

        let reason = match overdue_text(&status) {
            Some(text) => text,
            None => "Replacement due soon".to_string(),
        };
        notices.push(ReplacementNotice {
            part_id: part.base.id,
            part_name: part.name.clone(),
            motorcycle_id: part.motorcycle_id,
            status,
            priority,
            reason,
        });
    }
    notices
}
