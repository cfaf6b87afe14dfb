pub mod request;
pub mod response;
pub mod service;

pub use request::{CompleteServiceRequest, OdometerReading};
pub use response::{CompleteServiceResponse, CompletedServiceOutcome, SkippedService};
pub use service::execute;

use crate::usecases::common::UseCaseMetadata;

pub struct CompleteService;

impl UseCaseMetadata for CompleteService {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "complete_service"
    }

    fn display_name() -> &'static str {
        "Complete service"
    }

    fn description() -> &'static str {
        "Mark selected services as done and roll their next-service thresholds forward"
    }
}
