use super::request::CompleteServiceRequest;
use super::response::{CompleteServiceResponse, CompletedServiceOutcome, SkippedService};
use crate::domain::a001_motorcycle::MotorcycleId;
use crate::domain::a002_maintenance_record::MaintenanceRecord;
use crate::usecases::common::{UseCaseError, UseCaseResult};
use std::collections::HashMap;

/// Complete the selected services in place.
///
/// Each record needs an odometer reading for its motorcycle; records
/// without one, and ids that match nothing, land in `skipped` instead of
/// failing the whole batch. Completion stamps the record, snapshots the
/// odometer and rolls the next-service thresholds from the record's
/// intervals.
pub fn execute(
    records: &mut [MaintenanceRecord],
    request: &CompleteServiceRequest,
) -> UseCaseResult<CompleteServiceResponse> {
    if request.maintenance_ids.is_empty() {
        return Err(UseCaseError::validation("No maintenance records selected"));
    }

    let readings: HashMap<MotorcycleId, f64> = request
        .odometer_readings
        .iter()
        .map(|reading| (reading.motorcycle_id, reading.mileage))
        .collect();

    let mut completed = Vec::new();
    let mut skipped = Vec::new();

    for record_id in &request.maintenance_ids {
        let record = match records.iter_mut().find(|record| record.base.id == *record_id) {
            Some(record) => record,
            None => {
                skipped.push(SkippedService {
                    record_id: *record_id,
                    reason: "Record not found".to_string(),
                });
                continue;
            }
        };

        let odometer = match readings.get(&record.motorcycle_id) {
            Some(odometer) => *odometer,
            None => {
                skipped.push(SkippedService {
                    record_id: *record_id,
                    reason: format!(
                        "No odometer reading for motorcycle {}",
                        record.motorcycle_id.value()
                    ),
                });
                continue;
            }
        };

        record.complete(request.completed_at, odometer);
        completed.push(CompletedServiceOutcome {
            record_id: *record_id,
            next_service_date: record.next_service_date,
            next_service_mileage: record.next_service_mileage,
        });
    }

    let message = format!(
        "Completed {} of {} selected services",
        completed.len(),
        request.maintenance_ids.len()
    );
    Ok(CompleteServiceResponse {
        completed,
        skipped,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_maintenance_record::MaintenanceRecordId;
    use crate::domain::common::event_types;
    use crate::enums::ServiceType;
    use crate::usecases::u101_complete_service::OdometerReading;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scheduled(id: i64, motorcycle_id: i64) -> MaintenanceRecord {
        let mut record = MaintenanceRecord::new_with_id(
            MaintenanceRecordId::new(id),
            MotorcycleId::new(motorcycle_id),
            ServiceType::OilChange,
            "Oil change".to_string(),
            day(2025, 1, 10),
            18000.0,
        );
        record.is_completed = false;
        record.is_scheduled = true;
        record.service_interval_km = Some(6000.0);
        record.service_interval_months = Some(6);
        record
    }

    #[test]
    fn test_completes_and_rolls_thresholds() {
        let mut records = vec![scheduled(1, 1)];
        let request = CompleteServiceRequest {
            maintenance_ids: vec![MaintenanceRecordId::new(1)],
            completed_at: day(2025, 6, 15),
            odometer_readings: vec![OdometerReading {
                motorcycle_id: MotorcycleId::new(1),
                mileage: 21500.0,
            }],
        };

        let response = execute(&mut records, &request).unwrap();
        assert_eq!(response.completed.len(), 1);
        assert!(response.skipped.is_empty());
        assert_eq!(response.completed[0].next_service_mileage, Some(27500.0));
        assert_eq!(response.completed[0].next_service_date, Some(day(2025, 12, 15)));

        let record = &mut records[0];
        assert!(record.is_completed);
        assert!(!record.is_scheduled);
        assert_eq!(record.performed_at, day(2025, 6, 15));
        assert_eq!(record.mileage_at_service, 21500.0);
        let events = record.base.events.drain();
        assert!(events
            .iter()
            .any(|event| event.event_type == event_types::SERVICE_COMPLETED));
    }

    #[test]
    fn test_skips_unknown_and_unread_records() {
        let mut records = vec![scheduled(1, 1), scheduled(2, 2)];
        let request = CompleteServiceRequest {
            maintenance_ids: vec![
                MaintenanceRecordId::new(1),
                MaintenanceRecordId::new(2),
                MaintenanceRecordId::new(99),
            ],
            completed_at: day(2025, 6, 15),
            // Only motorcycle 1 got its odometer read
            odometer_readings: vec![OdometerReading {
                motorcycle_id: MotorcycleId::new(1),
                mileage: 21500.0,
            }],
        };

        let response = execute(&mut records, &request).unwrap();
        assert_eq!(response.completed.len(), 1);
        assert_eq!(response.skipped.len(), 2);
        assert_eq!(response.message, "Completed 1 of 3 selected services");
        assert!(!records[1].is_completed);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut records = vec![scheduled(1, 1)];
        let request = CompleteServiceRequest {
            maintenance_ids: Vec::new(),
            completed_at: day(2025, 6, 15),
            odometer_readings: Vec::new(),
        };

        let error = execute(&mut records, &request).unwrap_err();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
