#[macro_use]
extern crate rust_i18n;

pub mod components;
pub mod config;
pub mod error;
pub mod utils;

pub use components::availability::{is_participant_available, is_room_available, room_statuses};
pub use components::calendar::has_conflict;
pub use components::classifier::{category_to_color, classify_event, event_color, filter_events, legend};
pub use components::suggestions::{generate_suggestions, generate_suggestions_with_rng};

// Initialize i18n
i18n!("locales", fallback = "en");
