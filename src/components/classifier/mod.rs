//! Event color classification.
//!
//! Resolution order lives in [`classify_event`]; the palette lives in
//! [`category_to_color`]. The two are kept apart so a new category only
//! needs a new match arm in each.

pub mod models;

pub use models::{Color, ColorCategory, LegendEntry};

use crate::components::calendar::{CalendarEvent, MeetingOutcome, MeetingStatus, RoomId};
use std::collections::HashSet;

/// Resolve the display category of an event, first match wins
pub fn classify_event(event: &CalendarEvent) -> ColorCategory {
    if event.custom_color.is_some() {
        return ColorCategory::Custom;
    }

    match (event.meeting_outcome, event.meeting_status) {
        (Some(MeetingOutcome::Happened), _) => return ColorCategory::OutcomeHappened,
        (Some(MeetingOutcome::DidNotHappen), None) => return ColorCategory::OutcomeNotHappened,
        _ => {}
    }

    match event.meeting_status {
        Some(MeetingStatus::Postponed) => return ColorCategory::StatusPostponed,
        Some(MeetingStatus::Rescheduled) => return ColorCategory::StatusRescheduled,
        _ => {}
    }

    match event.room_id {
        RoomId::RoomA => ColorCategory::RoomA,
        RoomId::RoomB => ColorCategory::RoomB,
        _ => ColorCategory::Uncategorized,
    }
}

/// Palette color for a category
///
/// `Custom` maps to a neutral placeholder; use [`event_color`] to get the
/// event's own override.
pub fn category_to_color(category: ColorCategory) -> Color {
    match category {
        ColorCategory::Custom => Color::rgb(0x9E_9E_9E),
        ColorCategory::OutcomeHappened => Color::rgb(0x2E_7D_32), // Green
        ColorCategory::OutcomeNotHappened => Color::rgb(0xC6_28_28), // Red
        ColorCategory::StatusPostponed => Color::rgb(0xFF_A0_00), // Amber
        ColorCategory::StatusRescheduled => Color::rgb(0x8E_24_AA), // Purple
        ColorCategory::RoomA => Color::rgb(0x15_65_C0), // Blue
        ColorCategory::RoomB => Color::rgb(0x00_83_8F), // Teal
        ColorCategory::Uncategorized => Color::rgb(0x78_90_9C),
    }
}

/// Color an event is drawn with
pub fn event_color(event: &CalendarEvent) -> Color {
    match (classify_event(event), event.custom_color) {
        (ColorCategory::Custom, Some(color)) => color,
        (category, _) => category_to_color(category),
    }
}

/// Legend rows for every category, in resolution order
pub fn legend() -> Vec<LegendEntry> {
    ColorCategory::ALL
        .iter()
        .map(|&category| LegendEntry {
            category,
            label: category.label(),
            color: category_to_color(category),
        })
        .collect()
}

/// Keep the events whose category is enabled in the filter
pub fn filter_events<'a>(
    events: &'a [CalendarEvent],
    enabled: &HashSet<ColorCategory>,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| enabled.contains(&classify_event(event)))
        .collect()
}
