// Session module
// A bookable, point-in-time instance of an experience

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Booking status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Available,
    Booked,
    Cancelled,
}

/// Seat capacity for a session. `available` counts unbooked seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub total: u32,
    pub available: u32,
}

impl Capacity {
    pub fn new(total: u32, available: u32) -> Result<Self, String> {
        if available > total {
            return Err("Available capacity cannot exceed total capacity".to_string());
        }
        Ok(Self { total, available })
    }

    pub fn full(total: u32) -> Self {
        Self {
            total,
            available: total,
        }
    }
}

/// Whether a session lies before or after the reference clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Past,
    Upcoming,
}

/// Resolved presentation state, computed once per session per render
/// instead of re-deriving `is_cancelled`/`is_booked`/`is_past` booleans
/// at every paint site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub status: SessionStatus,
    pub timing: Timing,
}

/// A bookable, point-in-time instance of an experience.
///
/// Duration comes from the owning series definition; drag rescheduling
/// changes `time` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Option<i64>,
    pub series_id: i64,
    pub date: NaiveDate,
    #[serde(with = "crate::utils::date::time_hm")]
    pub time: NaiveTime,
    /// Duration in minutes, from the owning series definition.
    pub duration_min: u32,
    pub status: SessionStatus,
    pub capacity: Capacity,
    /// Price in cents overriding the series price, if set.
    pub price_override_cents: Option<i64>,
}

impl Session {
    /// Create a new available session with required fields.
    ///
    /// # Returns
    /// Returns `Result<Session, String>` with validation
    pub fn new(
        series_id: i64,
        date: NaiveDate,
        time: NaiveTime,
        duration_min: u32,
        capacity: Capacity,
    ) -> Result<Self, String> {
        let session = Self {
            id: None,
            series_id,
            date,
            time,
            duration_min,
            status: SessionStatus::Available,
            capacity,
            price_override_cents: None,
        };
        session.validate()?;
        Ok(session)
    }

    /// Validate the session
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_min == 0 {
            return Err("Session duration must be positive".to_string());
        }

        if self.capacity.available > self.capacity.total {
            return Err("Available capacity cannot exceed total capacity".to_string());
        }

        if let Some(price) = self.price_override_cents {
            if price < 0 {
                return Err("Price override cannot be negative".to_string());
            }
        }

        Ok(())
    }

    /// Get the duration of the session
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_min as i64)
    }

    /// Start of the session as a local date-time.
    pub fn start(&self) -> Option<DateTime<Local>> {
        self.date
            .and_time(self.time)
            .and_local_timezone(Local)
            .single()
    }

    /// End time-of-day, saturating at the start when the duration wraps
    /// past midnight.
    pub fn end_time(&self) -> NaiveTime {
        let (end, wrapped) = self.time.overflowing_add_signed(self.duration());
        if wrapped != 0 {
            self.time
        } else {
            end
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == SessionStatus::Cancelled
    }

    /// Resolve the presentation state against a reference clock.
    pub fn style_state(&self, now: DateTime<Local>) -> StyleState {
        let timing = if self.date < now.date_naive()
            || (self.date == now.date_naive() && self.end_time() <= now.time())
        {
            Timing::Past
        } else {
            Timing::Upcoming
        };
        StyleState {
            status: self.status,
            timing,
        }
    }
}
