// Export components
pub mod availability;
pub mod calendar;
pub mod calendar_store;
pub mod classifier;
pub mod suggestions;

// Re-export the calendar store handle
pub use calendar_store::{CalendarSource, CalendarStoreHandle};
