use crate::components::calendar::{CalendarEvent, RoomId, TimeWindow};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::is_room_available;

lazy_static! {
    /// Rooms used when the configuration does not list any
    pub static ref DEFAULT_ROOMS: Vec<Room> = vec![
        Room::physical(RoomId::RoomA, "Room A"),
        Room::physical(RoomId::RoomB, "Room B"),
        Room {
            id: RoomId::Online,
            label: "Online".to_string(),
            is_virtual: true,
            is_catch_all: false,
        },
        Room {
            id: RoomId::Other,
            label: "Other location".to_string(),
            is_virtual: false,
            is_catch_all: true,
        },
    ];
}

/// A bookable location
///
/// Physical rooms are contended. The virtual room and the catch-all room
/// never are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub label: String,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_catch_all: bool,
}

impl Room {
    /// Create a physical, contended room
    pub fn physical(id: RoomId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            is_virtual: false,
            is_catch_all: false,
        }
    }

    pub fn is_physical(&self) -> bool {
        !self.is_virtual && !self.is_catch_all
    }
}

/// How the meeting is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingKind {
    InPerson,
    Virtual,
}

impl MeetingKind {
    /// Sort rank, in-person first
    pub fn rank(&self) -> u8 {
        match self {
            MeetingKind::InPerson => 0,
            MeetingKind::Virtual => 1,
        }
    }
}

/// A place the meeting could be held, with its ranking priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAlternative {
    pub room: Room,
    pub meeting_kind: MeetingKind,
    /// Lower is better
    pub priority: u8,
}

/// Ordered room alternatives for a window
///
/// Available physical rooms come first in configuration order, then the
/// virtual room, then the catch-all room.
pub fn find_room_alternatives(
    window: &TimeWindow,
    events: &[CalendarEvent],
    rooms: &[Room],
) -> Vec<RoomAlternative> {
    if !window.is_valid() {
        return Vec::new();
    }

    let mut alternatives: Vec<RoomAlternative> = rooms
        .iter()
        .filter(|room| room.is_physical() && is_room_available(room, window, events))
        .map(|room| RoomAlternative {
            room: room.clone(),
            meeting_kind: MeetingKind::InPerson,
            priority: 1,
        })
        .collect();

    let virtual_priority = if alternatives.is_empty() { 1 } else { 2 };
    if let Some(room) = rooms.iter().find(|room| room.is_virtual) {
        alternatives.push(RoomAlternative {
            room: room.clone(),
            meeting_kind: MeetingKind::Virtual,
            priority: virtual_priority,
        });
    }

    if let Some(room) = rooms.iter().find(|room| room.is_catch_all) {
        alternatives.push(RoomAlternative {
            room: room.clone(),
            meeting_kind: MeetingKind::InPerson,
            priority: 3,
        });
    }

    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(hour: u32) -> TimeWindow {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        TimeWindow::hour_at(day, hour).unwrap()
    }

    fn booking(room: RoomId, hour: u32) -> CalendarEvent {
        let w = slot(hour);
        let mut event = CalendarEvent::new(format!("{:?}-{}", room, hour), w.start, w.end);
        event.room_id = room;
        event
    }

    fn ids(alternatives: &[RoomAlternative]) -> Vec<(RoomId, u8)> {
        alternatives.iter().map(|a| (a.room.id, a.priority)).collect()
    }

    #[test]
    fn test_all_rooms_free() {
        let alternatives = find_room_alternatives(&slot(10), &[], &DEFAULT_ROOMS);
        assert_eq!(
            ids(&alternatives),
            vec![
                (RoomId::RoomA, 1),
                (RoomId::RoomB, 1),
                (RoomId::Online, 2),
                (RoomId::Other, 3)
            ]
        );
        assert_eq!(alternatives[2].meeting_kind, MeetingKind::Virtual);
        assert_eq!(alternatives[3].meeting_kind, MeetingKind::InPerson);
    }

    #[test]
    fn test_booked_room_is_skipped() {
        let events = vec![booking(RoomId::RoomA, 10)];
        let alternatives = find_room_alternatives(&slot(10), &events, &DEFAULT_ROOMS);
        assert_eq!(
            ids(&alternatives),
            vec![(RoomId::RoomB, 1), (RoomId::Online, 2), (RoomId::Other, 3)]
        );

        // Neighbouring hour is unaffected
        let alternatives = find_room_alternatives(&slot(11), &events, &DEFAULT_ROOMS);
        assert_eq!(alternatives[0].room.id, RoomId::RoomA);
    }

    #[test]
    fn test_virtual_promoted_when_no_physical_room() {
        let events = vec![booking(RoomId::RoomA, 14), booking(RoomId::RoomB, 14)];
        let alternatives = find_room_alternatives(&slot(14), &events, &DEFAULT_ROOMS);
        assert_eq!(ids(&alternatives), vec![(RoomId::Online, 1), (RoomId::Other, 3)]);
    }

    #[test]
    fn test_configuration_order_is_kept() {
        let rooms = vec![
            Room::physical(RoomId::RoomB, "Sauna"),
            Room::physical(RoomId::RoomA, "Library"),
        ];
        let alternatives = find_room_alternatives(&slot(9), &[], &rooms);
        assert_eq!(ids(&alternatives), vec![(RoomId::RoomB, 1), (RoomId::RoomA, 1)]);
    }

    #[test]
    fn test_degenerate_window_yields_nothing() {
        let w = slot(9);
        let inverted = TimeWindow {
            start: w.end,
            end: w.start,
        };
        assert!(find_room_alternatives(&inverted, &[], &DEFAULT_ROOMS).is_empty());
    }
}
