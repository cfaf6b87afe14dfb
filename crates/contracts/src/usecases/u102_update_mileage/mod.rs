pub mod request;
pub mod response;
pub mod service;

pub use request::UpdateMileageRequest;
pub use response::UpdateMileageResponse;
pub use service::execute;

use crate::usecases::common::UseCaseMetadata;

pub struct UpdateMileage;

impl UseCaseMetadata for UpdateMileage {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "update_mileage"
    }

    fn display_name() -> &'static str {
        "Update mileage"
    }

    fn description() -> &'static str {
        "Record a new odometer reading for a motorcycle"
    }
}
