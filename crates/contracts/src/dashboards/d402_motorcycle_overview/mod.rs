pub mod dto;
pub mod service;

pub use dto::{MotorcycleOverview, MotorcycleStatistics};
pub use service::{
    build_motorcycle_overview, build_motorcycle_statistics, ANNUAL_WINDOW_DAYS,
    RECENT_MAINTENANCE_LIMIT,
};
