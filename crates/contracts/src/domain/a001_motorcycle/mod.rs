pub mod aggregate;

pub use aggregate::{is_valid_license_plate, is_valid_vin, Motorcycle, MotorcycleDto, MotorcycleId};
