//! Use case contracts and their execution logic

pub mod common;
pub mod u101_complete_service;
pub mod u102_update_mileage;
