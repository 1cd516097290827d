//! Pure layout pipeline: raw sessions and rentals in, renderable geometry
//! out. Recomputed on every relevant input change; no caching is needed at
//! the cardinalities involved.

pub mod overlap;
pub mod rows;
pub mod segments;
pub mod time_grid;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::rental::Rental;
use crate::models::session::Session;
use overlap::{assign_columns, PixelInterval};
use segments::{Segment, WeekWindow};
use time_grid::TimeGridMapper;

/// Minimum visual height for degenerate (same-instant) session blocks.
pub const MIN_SESSION_HEIGHT: f32 = 18.0;

/// A session augmented with pixel geometry. Transient, recomputed each
/// render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedSession {
    pub session: Session,
    pub top: f32,
    pub height: f32,
    pub left_pct: f32,
    pub width_pct: f32,
}

/// One week of the month grid: its packed rental segments and the number of
/// stacked rows they need.
#[derive(Debug, Clone, Serialize)]
pub struct WeekLayout {
    #[serde(skip)]
    pub window: WeekWindow,
    pub segments: Vec<Segment>,
    pub row_count: usize,
}

/// Position every session on `date` within a day column.
///
/// Sessions on other dates are ignored. Times outside the business-hours
/// window still produce geometry (possibly negative `top`); clipping is the
/// renderer's concern.
pub fn day_layout(
    sessions: &[Session],
    date: NaiveDate,
    grid: &TimeGridMapper,
) -> Vec<PositionedSession> {
    let day_sessions: Vec<&Session> = sessions.iter().filter(|s| s.date == date).collect();

    let intervals: Vec<PixelInterval> = day_sessions
        .iter()
        .enumerate()
        .map(|(idx, session)| {
            let start = grid.time_to_offset(session.time);
            let height = grid
                .duration_height(session.duration_min)
                .max(MIN_SESSION_HEIGHT);
            PixelInterval {
                // Index, not id: unsaved sessions all carry id None
                session_id: idx as i64,
                start,
                end: start + height,
            }
        })
        .collect();

    let slots = assign_columns(&intervals);

    day_sessions
        .into_iter()
        .zip(intervals.iter().zip(slots.iter()))
        .map(|(session, (interval, slot))| {
            let (left_pct, width_pct) = slot.geometry();
            PositionedSession {
                session: session.clone(),
                top: interval.start,
                height: interval.end - interval.start,
                left_pct,
                width_pct,
            }
        })
        .collect()
}

/// Build the month grid: one packed `WeekLayout` per week window touching
/// the month.
pub fn month_layout(rentals: &[Rental], year: i32, month: u32) -> Vec<WeekLayout> {
    WeekWindow::for_month(year, month)
        .into_iter()
        .map(|window| {
            let segments: Vec<Segment> = rentals
                .iter()
                .filter_map(|rental| segments::split(rental, &window))
                .collect();
            let segments = rows::pack(segments);
            let row_count = rows::row_count(&segments);
            WeekLayout {
                window,
                segments,
                row_count,
            }
        })
        .collect()
}
