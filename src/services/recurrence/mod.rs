//! Expands a recurrence rule into concrete future session instances.
//!
//! Runs at series-creation time, not render time: the expanded sessions are
//! handed to the store's bulk insert and live on as ordinary records.

use chrono::{DateTime, Local};

use crate::models::recurrence::RecurrenceRule;
use crate::models::session::{Capacity, Session, SessionStatus};

/// Capacity and pricing applied to every materialized session.
#[derive(Debug, Clone)]
pub struct SessionTemplate {
    pub series_id: i64,
    pub duration_min: u32,
    pub capacity: Capacity,
    pub price_override_cents: Option<i64>,
}

/// Outcome of expanding a rule. A rule entirely in the past is not an
/// error; it simply produces nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    Sessions(Vec<Session>),
    NothingToCreate,
}

/// Expand `rule` into one session per retained occurrence date.
///
/// Dates before `now`'s day are dropped, and so is today unless the rule's
/// time-of-day is strictly later than the current time.
pub fn expand(rule: &RecurrenceRule, template: &SessionTemplate, now: DateTime<Local>) -> Expansion {
    let today = now.date_naive();
    let step = rule.step_days();
    let mut sessions = Vec::new();

    let mut date = rule.start_date;
    while date <= rule.end_date {
        let in_future = date > today || (date == today && rule.time_of_day > now.time());
        if in_future {
            sessions.push(Session {
                id: None,
                series_id: template.series_id,
                date,
                time: rule.time_of_day,
                duration_min: template.duration_min,
                status: SessionStatus::Available,
                capacity: template.capacity,
                price_override_cents: template.price_override_cents,
            });
        }
        date += chrono::Duration::days(step);
    }

    if sessions.is_empty() {
        log::debug!(
            "recurrence {}..{} produced no future occurrences",
            rule.start_date,
            rule.end_date
        );
        Expansion::NothingToCreate
    } else {
        Expansion::Sessions(sessions)
    }
}
