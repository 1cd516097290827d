// Booking Calendar Library
// Exports the scheduling and layout engine for testing and reuse

pub mod models;
pub mod services;
pub mod utils;
