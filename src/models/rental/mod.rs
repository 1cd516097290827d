// Rental module
// Multi-day, inclusive-date booking of a unit or experience

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A multi-day booking with inclusive start and end dates and no time
/// component. Read-only input to month layout; its date range is never
/// mutated by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: Option<i64>,
    pub series_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub unit_count: u32,
}

impl Rental {
    /// Create a new rental with required fields.
    ///
    /// # Returns
    /// Returns `Result<Rental, String>` with validation
    pub fn new(
        series_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        unit_count: u32,
    ) -> Result<Self, String> {
        let rental = Self {
            id: None,
            series_id,
            start_date,
            end_date,
            unit_count,
        };
        rental.validate()?;
        Ok(rental)
    }

    /// Validate the rental
    pub fn validate(&self) -> Result<(), String> {
        if self.end_date < self.start_date {
            return Err("Rental end date must not precede start date".to_string());
        }
        if self.unit_count == 0 {
            return Err("Rental must book at least one unit".to_string());
        }
        Ok(())
    }

    /// Number of calendar days covered, inclusive of both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
