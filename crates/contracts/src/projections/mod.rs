//! List projections and rollups behind the register pages

pub mod p900_parts_register;
pub mod p901_ride_register;
pub mod p902_maintenance_register;
