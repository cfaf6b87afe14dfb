pub mod aggregate;

pub use aggregate::{Part, PartDto, PartId};
