pub mod drag;
pub mod layout;
pub mod palette;
pub mod recurrence;
pub mod settings;
pub mod store;
