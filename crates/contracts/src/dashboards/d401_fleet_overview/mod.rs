pub mod dto;
pub mod service;

pub use dto::{ActivityEntry, DashboardStats, FleetHighlight, FleetSummary};
pub use service::{
    build_dashboard_stats, build_fleet_summary, EXPENSE_WINDOW_DAYS, RECENT_ACTIVITY_LIMIT,
};
