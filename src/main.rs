// Debug harness: runs the layout pipeline over sample data and prints the
// resulting geometry as JSON.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveTime};

use booking_calendar::models::recurrence::{Frequency, RecurrenceRule};
use booking_calendar::models::rental::Rental;
use booking_calendar::models::session::Capacity;
use booking_calendar::services::layout::time_grid::TimeGridMapper;
use booking_calendar::services::layout::{day_layout, month_layout};
use booking_calendar::services::recurrence::{expand, Expansion, SessionTemplate};
use booking_calendar::services::settings::load_grid_config;
use booking_calendar::services::store::{MemoryStore, SessionStore};

fn main() -> Result<()> {
    env_logger::init();

    let config = load_grid_config();
    log::info!("grid config: {:?}", config);
    let grid = TimeGridMapper::new(config);

    let now = Local::now();
    let today = now.date_naive();

    let mut store = MemoryStore::new();
    store.add_rental(Rental::new(1, today, today + chrono::Duration::days(4), 2).unwrap());
    store.add_rental(
        Rental::new(2, today + chrono::Duration::days(3), today + chrono::Duration::days(9), 1)
            .unwrap(),
    );

    // Materialize a daily series for the coming week
    let rule = RecurrenceRule {
        start_date: today,
        end_date: today + chrono::Duration::days(6),
        time_of_day: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        frequency: Frequency::Daily,
    };
    let template = SessionTemplate {
        series_id: 1,
        duration_min: 90,
        capacity: Capacity::full(8),
        price_override_cents: None,
    };
    match expand(&rule, &template, now) {
        Expansion::Sessions(sessions) => {
            let count = store.insert_sessions(sessions)?;
            log::info!("materialized {count} sessions");
        }
        Expansion::NothingToCreate => log::info!("nothing to create"),
    }

    let tomorrow = today + chrono::Duration::days(1);
    let sessions = store.sessions_in_range(tomorrow, tomorrow)?;
    let positioned = day_layout(&sessions, tomorrow, &grid);
    println!("{}", serde_json::to_string_pretty(&positioned)?);

    let rentals = store.rentals_in_range(today, today + chrono::Duration::days(31))?;
    let weeks = month_layout(&rentals, today.year(), today.month());
    println!("{}", serde_json::to_string_pretty(&weeks)?);

    Ok(())
}
