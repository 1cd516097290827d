// Recurrence module
// Rule describing a daily or weekly series of sessions

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
}

/// A recurrence rule over an inclusive date range at a fixed time-of-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "crate::utils::date::time_hm")]
    pub time_of_day: NaiveTime,
    pub frequency: Frequency,
}

impl RecurrenceRule {
    pub fn validate(&self) -> Result<(), String> {
        if self.end_date < self.start_date {
            return Err("Recurrence end date must not precede start date".to_string());
        }
        Ok(())
    }

    /// Step between occurrences, in days.
    pub fn step_days(&self) -> i64 {
        match self.frequency {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
        }
    }
}
