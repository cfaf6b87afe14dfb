//! Read models for the dashboard surfaces

pub mod d400_maintenance_due;
pub mod d401_fleet_overview;
pub mod d402_motorcycle_overview;
