// Test fixtures - reusable test data
// Provides consistent test data across integration test files

use chrono::{NaiveDate, NaiveTime};

use booking_calendar::models::rental::Rental;
use booking_calendar::models::session::{Capacity, Session};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// A saved rental with a fixed id.
pub fn rental(id: i64, start: NaiveDate, end: NaiveDate) -> Rental {
    let mut r = Rental::new(id, start, end, 1).unwrap();
    r.id = Some(id);
    r
}

/// A saved one-hour session.
pub fn session(id: i64, on: NaiveDate, at: NaiveTime) -> Session {
    let mut s = Session::new(1, on, at, 60, Capacity::full(10)).unwrap();
    s.id = Some(id);
    s
}
