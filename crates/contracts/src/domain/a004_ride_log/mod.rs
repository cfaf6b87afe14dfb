pub mod aggregate;

pub use aggregate::{RideLog, RideLogDto, RideLogId};
