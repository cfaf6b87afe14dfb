pub mod dto;
pub mod engine;

pub use dto::{ClassifiedService, DueSummary, OverdueStatus, ServiceSchedule};
pub use engine::{
    assign_priority, classify_all, classify_overdue, classify_schedule, due_text,
    due_within_window, overdue_text, sort_for_display, summarize, DEFAULT_WINDOW_DAYS,
    DUE_SOON_DAYS, DUE_SOON_DISTANCE_KM, DUE_TEXT_SOON_DAYS,
};
