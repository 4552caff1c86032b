use crate::components::availability::{MeetingKind, Room};
use crate::components::calendar::{TimeWindow, User};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// People proposed for a meeting; only the primary role is mandatory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantAssignment {
    pub primary: User,
    pub secondary: Option<User>,
    pub tertiary: Option<User>,
}

impl ParticipantAssignment {
    /// Names of everyone assigned, primary first
    pub fn names(&self) -> Vec<&str> {
        [Some(&self.primary), self.secondary.as_ref(), self.tertiary.as_ref()]
            .into_iter()
            .flatten()
            .map(|user| user.name.as_str())
            .collect()
    }
}

/// A fully specified meeting proposal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionCandidate {
    pub window: TimeWindow,
    pub room: Room,
    pub meeting_kind: MeetingKind,
    pub participants: ParticipantAssignment,
    pub subject: String,
    pub date_label: String,
    /// Ranking only; lower is better
    #[serde(skip)]
    pub priority: u8,
}

impl SuggestionCandidate {
    pub fn start(&self) -> NaiveDateTime {
        self.window.start
    }

    /// Composite `date-hour-room` key, unique within one run
    pub fn key(&self) -> String {
        format!(
            "{}-{:02}-{}",
            self.window.start.format("%Y-%m-%d"),
            self.window.start.hour(),
            self.room.id.code()
        )
    }
}
