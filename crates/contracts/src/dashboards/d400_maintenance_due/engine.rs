use super::dto::{ClassifiedService, DueSummary, OverdueStatus, ServiceSchedule};
use crate::enums::Priority;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_distance;
use chrono::NaiveDate;

// ============================================================================
// Thresholds
// ============================================================================

/// A service due within this many days is at least medium priority
pub const DUE_SOON_DAYS: i64 = 30;
/// A service due within this many kilometers is at least medium priority
pub const DUE_SOON_DISTANCE_KM: f64 = 1000.0;
/// Below this many days the due text switches to a countdown
pub const DUE_TEXT_SOON_DAYS: i64 = 7;
/// Default look-ahead for the upcoming-services window
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

// ============================================================================
// Classification
// ============================================================================

/// Evaluate the two overdue axes of a schedule.
///
/// The date axis trips strictly after the due date has passed; a service
/// due today is not overdue yet. The mileage axis trips as soon as the
/// odometer reaches the due mileage, so a margin of exactly zero already
/// counts as overdue. Either axis alone is enough.
pub fn classify_overdue(
    due_date: Option<NaiveDate>,
    due_mileage: Option<f64>,
    current_mileage: Option<f64>,
    today: NaiveDate,
) -> OverdueStatus {
    let days_overdue = due_date.and_then(|due| {
        let days = (today - due).num_days();
        if days > 0 {
            Some(days)
        } else {
            None
        }
    });

    let mileage_overdue = match (due_mileage, current_mileage) {
        (Some(due), Some(current)) if current >= due => Some(current - due),
        _ => None,
    };

    OverdueStatus {
        is_overdue: days_overdue.is_some() || mileage_overdue.is_some(),
        days_overdue,
        mileage_overdue,
    }
}

/// Assign a priority to an evaluated schedule.
///
/// Overdue is always high. Otherwise the service is medium when its due
/// date falls within [`DUE_SOON_DAYS`] or its due mileage falls within
/// [`DUE_SOON_DISTANCE_KM`] of the odometer, and low when neither axis is
/// close. High never occurs without overdue.
pub fn assign_priority(
    status: &OverdueStatus,
    due_date: Option<NaiveDate>,
    due_mileage: Option<f64>,
    current_mileage: Option<f64>,
    today: NaiveDate,
) -> Priority {
    if status.is_overdue {
        return Priority::High;
    }

    if let Some(due) = due_date {
        let days_until = (due - today).num_days();
        if days_until <= DUE_SOON_DAYS {
            return Priority::Medium;
        }
    }

    if let (Some(due), Some(current)) = (due_mileage, current_mileage) {
        if due - current <= DUE_SOON_DISTANCE_KM {
            return Priority::Medium;
        }
    }

    Priority::Low
}

/// Classify one schedule row: overdue axes first, then priority
pub fn classify_schedule(schedule: ServiceSchedule, today: NaiveDate) -> ClassifiedService {
    let status = classify_overdue(
        schedule.due_date,
        schedule.due_mileage,
        schedule.current_mileage,
        today,
    );
    let priority = assign_priority(
        &status,
        schedule.due_date,
        schedule.due_mileage,
        schedule.current_mileage,
        today,
    );
    ClassifiedService {
        schedule,
        status,
        priority,
    }
}

/// Classify every schedule in the list against the same reference day
pub fn classify_all(schedules: Vec<ServiceSchedule>, today: NaiveDate) -> Vec<ClassifiedService> {
    schedules
        .into_iter()
        .map(|schedule| classify_schedule(schedule, today))
        .collect()
}

// ============================================================================
// Display text
// ============================================================================

/// Describe how far past due a service is, e.g. "10 days overdue" or
/// "3 days overdue, 1.200 km overdue".
///
/// Only positive measures contribute a part; a service overdue by exactly
/// zero kilometers falls back to the plain "Overdue". Returns `None` for a
/// service that is not overdue at all.
pub fn overdue_text(status: &OverdueStatus) -> Option<String> {
    if !status.is_overdue {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(days) = status.days_overdue {
        if days > 0 {
            let unit = if days == 1 { "day" } else { "days" };
            parts.push(format!("{} {} overdue", days, unit));
        }
    }
    if let Some(km) = status.mileage_overdue {
        if km > 0.0 {
            parts.push(format!("{} overdue", format_distance(km)));
        }
    }

    if parts.is_empty() {
        Some("Overdue".to_string())
    } else {
        Some(parts.join(", "))
    }
}

/// One-line due description for a classified service.
///
/// Overdue services reuse [`overdue_text`]. Upcoming services combine a
/// date part (countdown within [`DUE_TEXT_SOON_DAYS`], calendar date
/// beyond it) and a mileage part ("... remaining", or "Due now" at exactly
/// zero) with " • ". A schedule with no describable axis reads "Due soon".
pub fn due_text(item: &ClassifiedService, today: NaiveDate) -> String {
    if let Some(text) = overdue_text(&item.status) {
        return text;
    }

    let mut parts: Vec<String> = Vec::new();

    if let Some(due) = item.schedule.due_date {
        let days_until = (due - today).num_days();
        if days_until <= DUE_TEXT_SOON_DAYS {
            let unit = if days_until == 1 { "day" } else { "days" };
            parts.push(format!("Due in {} {}", days_until, unit));
        } else {
            parts.push(format!("Due {}", format_date(due)));
        }
    }

    if let (Some(due), Some(current)) = (item.schedule.due_mileage, item.schedule.current_mileage) {
        let remaining = due - current;
        if remaining > 0.0 {
            parts.push(format!("{} remaining", format_distance(remaining)));
        } else if remaining == 0.0 {
            parts.push("Due now".to_string());
        }
    }

    if parts.is_empty() {
        "Due soon".to_string()
    } else {
        parts.join(" • ")
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Roll a classified list up into dashboard counts.
///
/// Overdue and upcoming always partition the total. Urgent counts
/// high-priority rows that are not overdue; the classifier never produces
/// such rows itself, but lists assembled elsewhere may carry them.
pub fn summarize(items: &[ClassifiedService]) -> DueSummary {
    let total = items.len();
    let overdue_count = items.iter().filter(|item| item.status.is_overdue).count();
    let urgent_count = items
        .iter()
        .filter(|item| item.priority == Priority::High && !item.status.is_overdue)
        .count();

    DueSummary {
        total,
        overdue_count,
        upcoming_count: total - overdue_count,
        urgent_count,
    }
}

/// Order a classified list for display: overdue first, then by priority,
/// then by due date with dateless rows last. The sort is stable, so rows
/// equal on all three keys keep their incoming order.
pub fn sort_for_display(items: &mut [ClassifiedService]) {
    items.sort_by(|a, b| {
        b.status
            .is_overdue
            .cmp(&a.status.is_overdue)
            .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
            .then_with(|| match (a.schedule.due_date, b.schedule.due_date) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
    });
}

/// Keep the schedules worth surfacing in an upcoming-services window.
///
/// A schedule stays when it is already overdue, its due date falls within
/// `days_ahead` days, or its due mileage is within
/// [`DUE_SOON_DISTANCE_KM`] of the odometer. The mileage arm keeps
/// date-less schedules from hiding until the day they trip.
pub fn due_within_window(
    schedules: Vec<ServiceSchedule>,
    days_ahead: i64,
    today: NaiveDate,
) -> Vec<ServiceSchedule> {
    let horizon = today + chrono::Duration::days(days_ahead);
    schedules
        .into_iter()
        .filter(|schedule| {
            let status = classify_overdue(
                schedule.due_date,
                schedule.due_mileage,
                schedule.current_mileage,
                today,
            );
            if status.is_overdue {
                return true;
            }
            if let Some(due) = schedule.due_date {
                if due <= horizon {
                    return true;
                }
            }
            if let (Some(due), Some(current)) = (schedule.due_mileage, schedule.current_mileage) {
                if due - current <= DUE_SOON_DISTANCE_KM {
                    return true;
                }
            }
            false
        })
        .collect()
}
