use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use meeting_suggester::components::calendar::{CalendarEvent, RoomId, User};
use meeting_suggester::components::calendar_store::fetch_for_suggestions;
use meeting_suggester::components::CalendarSource;
use meeting_suggester::config::SuggestionConfig;
use meeting_suggester::error::{calendar_store_error, AssistantResult};
use meeting_suggester::generate_suggestions_with_rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Mock calendar source for testing without a snapshot file
#[derive(Debug, Default)]
pub struct MockCalendarSource {
    events: Vec<CalendarEvent>,
    users: Vec<User>,
    fail_users: bool,
    requested_ranges: Mutex<Vec<(NaiveDateTime, NaiveDateTime)>>,
}

impl MockCalendarSource {
    /// Create a new mock with two users and one booking
    pub fn new() -> Self {
        let mut booking = CalendarEvent::new("event1", at(3, 10), at(3, 11));
        booking.subject = Some("Planning".to_string());
        booking.room_id = RoomId::RoomA;
        booking.organizer = Some("Alice".to_string());

        Self {
            events: vec![booking],
            users: vec![User::new("u1", "Alice"), User::new("u2", "Bob")],
            ..Default::default()
        }
    }

    /// Make the user listing fail
    pub fn failing() -> Self {
        Self {
            fail_users: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl CalendarSource for MockCalendarSource {
    async fn list_events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<CalendarEvent>> {
        self.requested_ranges.lock().unwrap().push((start, end));
        Ok(self
            .events
            .iter()
            .filter(|event| event.start < end && start < event.end)
            .cloned()
            .collect())
    }

    async fn list_active_users(&self) -> AssistantResult<Vec<User>> {
        if self.fail_users {
            return Err(calendar_store_error("Mock user listing failed"));
        }
        Ok(self.users.clone())
    }
}

/// The fetch range covers subject history and the whole horizon
#[tokio::test]
async fn test_fetch_requests_history_and_horizon() {
    let source = MockCalendarSource::new();
    let config = SuggestionConfig::default();

    let fetched = fetch_for_suggestions(&source, at(3, 8), &config).await.unwrap();
    assert_eq!(fetched.events.len(), 1);
    assert_eq!(fetched.users.len(), 2);

    let ranges = source.requested_ranges.lock().unwrap().clone();
    assert_eq!(ranges, vec![(at(3, 8) - chrono::Duration::days(30), at(5, 0))]);
}

/// A failing source fails the whole fetch
#[tokio::test]
async fn test_fetch_propagates_source_errors() {
    let source = MockCalendarSource::failing();
    let config = SuggestionConfig::default();

    assert!(fetch_for_suggestions(&source, at(3, 8), &config).await.is_err());
}

/// Full run through the trait object
#[tokio::test]
async fn test_suggestions_from_mock_source() {
    let source = MockCalendarSource::new();
    let config = SuggestionConfig::default();
    let now = at(3, 8);

    let dyn_source: &dyn CalendarSource = &source;
    let fetched = fetch_for_suggestions(dyn_source, now, &config).await.unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let suggestions =
        generate_suggestions_with_rng(&fetched.events, &fetched.users, now, &config, &mut rng);

    assert_eq!(suggestions.len(), 5);

    // Alice is busy at 10:00, so only Bob can lead that slot
    let ten = suggestions
        .iter()
        .find(|s| s.window.start == at(3, 10))
        .unwrap();
    assert_eq!(ten.participants.primary.name, "Bob");
    assert!(ten.participants.secondary.is_none());
    assert_eq!(ten.room.id, RoomId::RoomB);
}
