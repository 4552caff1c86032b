use crate::components::classifier::models::Color;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::time::TimeWindow;

/// Room an event is booked into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    RoomA,
    RoomB,
    Online,
    Other,
    #[default]
    #[serde(rename = "none")]
    Unassigned,
}

impl RoomId {
    /// Short stable code used in candidate keys
    pub fn code(&self) -> &'static str {
        match self {
            RoomId::RoomA => "room_a",
            RoomId::RoomB => "room_b",
            RoomId::Online => "online",
            RoomId::Other => "other",
            RoomId::Unassigned => "none",
        }
    }
}

/// Reason recorded on a meeting that did not go ahead as planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Postponed,
    Rescheduled,
    CancelledByClient,
    CancelledByHost,
}

/// Whether a meeting took place; absence means unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingOutcome {
    Happened,
    DidNotHappen,
}

/// Calendar event as supplied by the calendar store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub room_id: RoomId,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub primary_participant: Option<String>,
    #[serde(default)]
    pub secondary_participant: Option<String>,
    #[serde(default)]
    pub tertiary_participant: Option<String>,
    #[serde(default)]
    pub custom_color: Option<Color>,
    #[serde(default)]
    pub meeting_status: Option<MeetingStatus>,
    #[serde(default)]
    pub meeting_outcome: Option<MeetingOutcome>,
    /// Linked sales opportunity, if any
    #[serde(default)]
    pub opportunity: Option<String>,
    /// Linked client record, if any
    #[serde(default)]
    pub client: Option<String>,
}

impl CalendarEvent {
    /// Create an event with only the required fields set
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            ..Default::default()
        }
    }

    /// The event's time span
    pub fn window(&self) -> TimeWindow {
        TimeWindow::from_event(self)
    }

    /// Names attached to the event: organizer first, then the three roles
    pub fn people(&self) -> impl Iterator<Item = &str> {
        [
            self.organizer.as_deref(),
            self.primary_participant.as_deref(),
            self.secondary_participant.as_deref(),
            self.tertiary_participant.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Whether the given name appears as organizer or in any participant role
    pub fn involves(&self, name: &str) -> bool {
        self.people().any(|person| person == name)
    }
}

/// A workspace user who can be assigned to a meeting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Create an active user
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
        }
    }
}

/// Events and users as read from the calendar store in one go
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarSnapshot {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    #[serde(default)]
    pub users: Vec<User>,
}
