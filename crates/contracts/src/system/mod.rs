//! System-level configuration aggregates

pub mod webhooks;
