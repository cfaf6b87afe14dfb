use super::request::UpdateMileageRequest;
use super::response::UpdateMileageResponse;
use crate::domain::a001_motorcycle::Motorcycle;
use crate::usecases::common::{UseCaseError, UseCaseResult};

/// Record a new odometer reading on the motorcycle.
///
/// The odometer only moves forward; a reading below the current mileage is
/// rejected as a validation error.
pub fn execute(
    motorcycle: &mut Motorcycle,
    request: &UpdateMileageRequest,
) -> UseCaseResult<UpdateMileageResponse> {
    if motorcycle.base.id != request.motorcycle_id {
        return Err(UseCaseError::not_found(format!(
            "Motorcycle {} not found",
            request.motorcycle_id.value()
        )));
    }

    let previous_mileage = motorcycle.current_mileage;
    motorcycle
        .update_mileage(request.new_mileage)
        .map_err(UseCaseError::validation)?;

    Ok(UpdateMileageResponse {
        motorcycle_id: motorcycle.base.id,
        previous_mileage,
        current_mileage: motorcycle.current_mileage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_motorcycle::MotorcycleId;
    use crate::domain::common::event_types;

    fn motorcycle() -> Motorcycle {
        Motorcycle::new_with_id(
            MotorcycleId::new(1),
            "Daily".to_string(),
            "Honda".to_string(),
            "CB500X".to_string(),
            2021,
            20000.0,
        )
    }

    #[test]
    fn test_moves_odometer_forward() {
        let mut bike = motorcycle();
        let request = UpdateMileageRequest {
            motorcycle_id: MotorcycleId::new(1),
            new_mileage: 20350.0,
        };

        let response = execute(&mut bike, &request).unwrap();
        assert_eq!(response.previous_mileage, 20000.0);
        assert_eq!(response.current_mileage, 20350.0);
        assert_eq!(bike.current_mileage, 20350.0);

        let events = bike.base.events.drain();
        assert!(events
            .iter()
            .any(|event| event.event_type == event_types::MILEAGE_UPDATED));
    }

    #[test]
    fn test_rejects_rollback() {
        let mut bike = motorcycle();
        let request = UpdateMileageRequest {
            motorcycle_id: MotorcycleId::new(1),
            new_mileage: 19000.0,
        };

        let error = execute(&mut bike, &request).unwrap_err();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(bike.current_mileage, 20000.0);
    }

    #[test]
    fn test_wrong_motorcycle_is_not_found() {
        let mut bike = motorcycle();
        let request = UpdateMileageRequest {
            motorcycle_id: MotorcycleId::new(42),
            new_mileage: 21000.0,
        };

        let error = execute(&mut bike, &request).unwrap_err();
        assert_eq!(error.code, "NOT_FOUND");
    }
}
