use super::dto::{MaintenanceCostTotals, MaintenanceFilter};
use crate::domain::a001_motorcycle::MotorcycleId;
use crate::domain::a002_maintenance_record::MaintenanceRecord;
use crate::enums::ServiceType;
use chrono::NaiveDate;

impl MaintenanceFilter {
    pub fn matches(&self, record: &MaintenanceRecord) -> bool {
        if let Some(motorcycle_id) = self.motorcycle_id {
            if record.motorcycle_id != motorcycle_id {
                return false;
            }
        }
        if let Some(service_type) = self.service_type {
            if record.service_type != service_type {
                return false;
            }
        }
        if self.completed_only && !record.is_completed {
            return false;
        }
        if let Some(from) = self.from {
            if record.performed_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.performed_at > to {
                return false;
            }
        }
        true
    }

    /// Keep matching records in their incoming order
    pub fn apply(&self, records: &[MaintenanceRecord]) -> Vec<MaintenanceRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Completed service history of one motorcycle, newest first, optionally
/// narrowed to a service type
pub fn maintenance_history(
    records: &[MaintenanceRecord],
    motorcycle_id: MotorcycleId,
    service_type: Option<ServiceType>,
) -> Vec<MaintenanceRecord> {
    let mut history: Vec<MaintenanceRecord> = records
        .iter()
        .filter(|record| record.motorcycle_id == motorcycle_id && record.is_completed)
        .filter(|record| match service_type {
            Some(wanted) => record.service_type == wanted,
            None => true,
        })
        .cloned()
        .collect();
    history.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
    history
}

/// Cost rollup over completed records, optionally narrowed to one
/// motorcycle and a performed-at range
pub fn build_maintenance_cost_totals(
    records: &[MaintenanceRecord],
    motorcycle_id: Option<MotorcycleId>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> MaintenanceCostTotals {
    let selection: Vec<&MaintenanceRecord> = records
        .iter()
        .filter(|record| record.is_completed)
        .filter(|record| match motorcycle_id {
            Some(id) => record.motorcycle_id == id,
            None => true,
        })
        .filter(|record| match from {
            Some(from) => record.performed_at >= from,
            None => true,
        })
        .filter(|record| match to {
            Some(to) => record.performed_at <= to,
            None => true,
        })
        .collect();

    let total_cost: f64 = selection.iter().map(|record| record.total_cost).sum();
    let labor_cost: f64 = selection.iter().map(|record| record.labor_cost).sum();
    let parts_cost: f64 = selection.iter().map(|record| record.parts_cost).sum();
    let record_count = selection.len();
    let average_cost = if record_count > 0 {
        total_cost / record_count as f64
    } else {
        0.0
    };

    MaintenanceCostTotals {
        total_cost,
        labor_cost,
        parts_cost,
        record_count,
        average_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_maintenance_record::MaintenanceRecordId;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(
        id: i64,
        motorcycle_id: i64,
        service_type: ServiceType,
        performed_at: NaiveDate,
    ) -> MaintenanceRecord {
        MaintenanceRecord::new_with_id(
            MaintenanceRecordId::new(id),
            MotorcycleId::new(motorcycle_id),
            service_type,
            service_type.display_name().to_string(),
            performed_at,
            10000.0,
        )
    }

    #[test]
    fn test_filter_arms() {
        let mut planned = record(1, 1, ServiceType::ValveAdjustment, day(2025, 8, 1));
        planned.is_completed = false;
        planned.is_scheduled = true;
        let records = vec![
            record(2, 1, ServiceType::OilChange, day(2025, 6, 1)),
            record(3, 2, ServiceType::OilChange, day(2025, 6, 2)),
            planned,
        ];

        let by_bike = MaintenanceFilter {
            motorcycle_id: Some(MotorcycleId::new(1)),
            ..Default::default()
        };
        assert_eq!(by_bike.apply(&records).len(), 2);

        let by_type = MaintenanceFilter {
            service_type: Some(ServiceType::OilChange),
            ..Default::default()
        };
        assert_eq!(by_type.apply(&records).len(), 2);

        let done_only = MaintenanceFilter {
            completed_only: true,
            ..Default::default()
        };
        assert_eq!(done_only.apply(&records).len(), 2);

        let in_june = MaintenanceFilter {
            from: Some(day(2025, 6, 1)),
            to: Some(day(2025, 6, 30)),
            ..Default::default()
        };
        assert_eq!(in_june.apply(&records).len(), 2);
    }

    #[test]
    fn test_history_newest_first_and_completed_only() {
        let mut open = record(1, 1, ServiceType::OilChange, day(2025, 7, 1));
        open.is_completed = false;
        let records = vec![
            record(2, 1, ServiceType::OilChange, day(2025, 3, 1)),
            record(3, 1, ServiceType::ChainMaintenance, day(2025, 5, 1)),
            record(4, 1, ServiceType::OilChange, day(2025, 6, 1)),
            open,
        ];

        let history = maintenance_history(&records, MotorcycleId::new(1), None);
        let ids: Vec<i64> = history.iter().map(|r| r.base.id.value()).collect();
        assert_eq!(ids, vec![4, 3, 2]);

        let oil_only =
            maintenance_history(&records, MotorcycleId::new(1), Some(ServiceType::OilChange));
        let ids: Vec<i64> = oil_only.iter().map(|r| r.base.id.value()).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn test_cost_totals() {
        let mut oil = record(1, 1, ServiceType::OilChange, day(2025, 6, 1));
        oil.labor_cost = 30.0;
        oil.parts_cost = 45.0;
        oil.recalculate_total();
        let mut tires = record(2, 1, ServiceType::TireReplacement, day(2025, 4, 1));
        tires.labor_cost = 60.0;
        tires.parts_cost = 240.0;
        tires.recalculate_total();
        let mut open = record(3, 1, ServiceType::ValveAdjustment, day(2025, 8, 1));
        open.is_completed = false;
        open.total_cost = 500.0;

        let totals =
            build_maintenance_cost_totals(&[oil, tires, open], Some(MotorcycleId::new(1)), None, None);
        assert_eq!(totals.record_count, 2);
        assert_eq!(totals.labor_cost, 90.0);
        assert_eq!(totals.parts_cost, 285.0);
        assert_eq!(totals.total_cost, 375.0);
        assert_eq!(totals.average_cost, 187.5);
    }

    #[test]
    fn test_cost_totals_empty() {
        let totals = build_maintenance_cost_totals(&[], None, None, None);
        assert_eq!(totals.record_count, 0);
        assert_eq!(totals.average_cost, 0.0);
    }
}
