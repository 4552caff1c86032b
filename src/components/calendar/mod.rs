pub mod models;
pub mod time;

pub use models::{CalendarEvent, CalendarSnapshot, MeetingOutcome, MeetingStatus, RoomId, User};
pub use time::{has_conflict, TimeWindow};
