//! Domain aggregates of the garage

pub mod common;

pub mod a001_motorcycle;
pub mod a002_maintenance_record;
pub mod a003_part;
pub mod a004_ride_log;
