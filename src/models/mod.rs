pub mod recurrence;
pub mod rental;
pub mod session;
