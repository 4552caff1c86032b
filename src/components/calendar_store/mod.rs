mod actor;
mod handle;

pub use handle::CalendarStoreHandle;

use crate::components::calendar::{CalendarEvent, CalendarSnapshot, User};
use crate::config::SuggestionConfig;
use crate::error::{config_error, snapshot_error, AssistantResult};
use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};
use std::path::Path;
use tracing::{info, warn};

/// Where events and users come from
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Events overlapping `[start, end)`
    async fn list_events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<CalendarEvent>>;

    /// Users that can be proposed as participants
    async fn list_active_users(&self) -> AssistantResult<Vec<User>>;
}

/// Read a JSON calendar snapshot from disk
pub async fn load_snapshot(path: &Path) -> AssistantResult<CalendarSnapshot> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        snapshot_error(&format!("Failed to read {}: {}", path.display(), e))
    })?;

    let snapshot: CalendarSnapshot = serde_json::from_str(&content).map_err(|e| {
        snapshot_error(&format!("Failed to parse {}: {}", path.display(), e))
    })?;

    let malformed = snapshot
        .events
        .iter()
        .filter(|event| event.start >= event.end)
        .count();
    if malformed > 0 {
        warn!("{} events in {} end before they start", malformed, path.display());
    }

    info!(
        "Loaded {} events and {} users from {}",
        snapshot.events.len(),
        snapshot.users.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Fetch everything one suggestion run needs
///
/// The event range reaches back over the subject history window and forward
/// to the end of the horizon. Both requests run concurrently.
pub async fn fetch_for_suggestions<S: CalendarSource + ?Sized>(
    source: &S,
    now: NaiveDateTime,
    config: &SuggestionConfig,
) -> AssistantResult<CalendarSnapshot> {
    let start = Duration::try_days(config.history_days.max(0))
        .and_then(|days| now.checked_sub_signed(days))
        .ok_or_else(|| {
            config_error(&format!("history_days {} is out of range", config.history_days))
        })?;

    // Midnight after the last scanned day; day 0 is today
    let end = Duration::try_days(i64::from(config.horizon_days.max(1)))
        .and_then(|horizon| now.date().checked_add_signed(horizon))
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            config_error(&format!("horizon_days {} is out of range", config.horizon_days))
        })?;

    let (events, users) = futures::try_join!(
        source.list_events_in_range(start, end),
        source.list_active_users()
    )?;

    Ok(CalendarSnapshot { events, users })
}
