//! Shared contracts and domain logic for the garage maintenance tracker.
//!
//! Everything here is surface-agnostic: aggregates and their validation,
//! the maintenance due engine, dashboard and register read models, use
//! case request/response contracts and the webhook payload shapes. API
//! and UI crates depend on this one and add transport and rendering on
//! top; nothing in here performs I/O.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;
