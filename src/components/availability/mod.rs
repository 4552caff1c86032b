pub mod rooms;

pub use rooms::{find_room_alternatives, MeetingKind, Room, RoomAlternative, DEFAULT_ROOMS};

use crate::components::calendar::time::conflicts_with_any;
use crate::components::calendar::{has_conflict, CalendarEvent, TimeWindow, User};
use serde::Serialize;
use tracing::trace;

/// Whether a room is free for the whole window
///
/// The virtual and catch-all rooms are never contended.
pub fn is_room_available(room: &Room, window: &TimeWindow, events: &[CalendarEvent]) -> bool {
    if !room.is_physical() {
        return true;
    }

    let busy = conflicts_with_any(window, events, |event| event.room_id == room.id);
    trace!("Room {} busy={} for {:?}", room.label, busy, window);
    !busy
}

/// Whether a user is free for the whole window
///
/// A user is busy when an overlapping event names them as organizer or in
/// any participant role. Matching is by name.
pub fn is_participant_available(user: &User, window: &TimeWindow, events: &[CalendarEvent]) -> bool {
    let busy = conflicts_with_any(window, events, |event| event.involves(&user.name));
    trace!("Participant {} busy={} for {:?}", user.name, busy, window);
    !busy
}

/// Occupancy of one room for a window, as shown in the room sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomStatus {
    pub room: Room,
    pub available: bool,
    /// First event holding the room, if any
    pub blocking_event_id: Option<String>,
}

/// Occupancy of every configured room for a window
pub fn room_statuses(rooms: &[Room], window: &TimeWindow, events: &[CalendarEvent]) -> Vec<RoomStatus> {
    rooms
        .iter()
        .map(|room| {
            let blocking_event_id = if room.is_physical() {
                events
                    .iter()
                    .find(|event| event.room_id == room.id && has_conflict(window, &event.window()))
                    .map(|event| event.id.clone())
            } else {
                None
            };

            RoomStatus {
                room: room.clone(),
                available: blocking_event_id.is_none(),
                blocking_event_id,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::calendar::RoomId;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn window(start: NaiveDateTime, end: NaiveDateTime) -> TimeWindow {
        TimeWindow::new(start, end).unwrap()
    }

    fn room(id: RoomId) -> Room {
        DEFAULT_ROOMS.iter().find(|r| r.id == id).cloned().unwrap()
    }

    #[test]
    fn test_physical_room_conflict() {
        let mut event = CalendarEvent::new("e1", at(10, 0), at(11, 0));
        event.room_id = RoomId::RoomA;
        let events = vec![event];

        assert!(!is_room_available(&room(RoomId::RoomA), &window(at(10, 0), at(11, 0)), &events));
        assert!(!is_room_available(&room(RoomId::RoomA), &window(at(10, 30), at(10, 45)), &events));
        assert!(is_room_available(&room(RoomId::RoomA), &window(at(11, 0), at(12, 0)), &events));
        assert!(is_room_available(&room(RoomId::RoomB), &window(at(10, 0), at(11, 0)), &events));
    }

    #[test]
    fn test_uncontended_rooms_always_available() {
        // Every event books the online and catch-all rooms for the whole day
        let events: Vec<CalendarEvent> = [RoomId::Online, RoomId::Other]
            .into_iter()
            .map(|id| {
                let mut e = CalendarEvent::new(id.code(), at(0, 0), at(23, 59));
                e.room_id = id;
                e
            })
            .collect();

        for hour in 8..18 {
            let w = window(at(hour, 0), at(hour + 1, 0));
            assert!(is_room_available(&room(RoomId::Online), &w, &events));
            assert!(is_room_available(&room(RoomId::Other), &w, &events));
        }
    }

    #[test]
    fn test_participant_matched_in_any_role() {
        let w = window(at(9, 0), at(10, 0));
        let alice = User::new("u1", "Alice");

        let roles: [fn(&mut CalendarEvent); 4] = [
            |e: &mut CalendarEvent| e.organizer = Some("Alice".to_string()),
            |e: &mut CalendarEvent| e.primary_participant = Some("Alice".to_string()),
            |e: &mut CalendarEvent| e.secondary_participant = Some("Alice".to_string()),
            |e: &mut CalendarEvent| e.tertiary_participant = Some("Alice".to_string()),
        ];

        for assign in roles {
            let mut event = CalendarEvent::new("e1", at(9, 30), at(10, 30));
            assign(&mut event);
            assert!(!is_participant_available(&alice, &w, &[event]));
        }

        let mut other = CalendarEvent::new("e2", at(9, 0), at(10, 0));
        other.primary_participant = Some("Bob".to_string());
        assert!(is_participant_available(&alice, &w, &[other]));
    }

    #[test]
    fn test_participant_free_after_meeting_ends() {
        let mut event = CalendarEvent::new("e1", at(8, 0), at(9, 0));
        event.organizer = Some("Alice".to_string());
        let alice = User::new("u1", "Alice");

        assert!(is_participant_available(&alice, &window(at(9, 0), at(10, 0)), &[event]));
    }

    #[test]
    fn test_room_statuses() {
        let mut event = CalendarEvent::new("busy", at(13, 0), at(14, 0));
        event.room_id = RoomId::RoomB;
        let statuses = room_statuses(&DEFAULT_ROOMS, &window(at(13, 0), at(14, 0)), &[event]);

        assert_eq!(statuses.len(), 4);
        assert!(statuses[0].available);
        assert!(!statuses[1].available);
        assert_eq!(statuses[1].blocking_event_id.as_deref(), Some("busy"));
        assert!(statuses[2].available && statuses[3].available);
    }
}
