use crate::components::availability::find_room_alternatives;
use crate::components::calendar::{CalendarEvent, TimeWindow, User};
use crate::config::{SuggestionConfig, MAX_HORIZON_DAYS};
use crate::utils::time::date_label;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

use super::models::SuggestionCandidate;
use super::participants::select_participants;
use super::subject::{generate_subject, SubjectContext};

/// Snapshot and settings shared by every cell of one run
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub events: &'a [CalendarEvent],
    pub users: &'a [User],
    pub now: NaiveDateTime,
    pub config: &'a SuggestionConfig,
}

/// Candidates for the one-hour slot starting at `hour:00` on `date`
///
/// Past slots and slots without a free primary participant yield nothing.
/// At most `alternatives_per_slot` room alternatives become candidates.
pub fn generate_slot_candidates<R: Rng + ?Sized>(
    date: NaiveDate,
    hour: u32,
    ctx: &ScanContext<'_>,
    rng: &mut R,
) -> Vec<SuggestionCandidate> {
    let Some(window) = TimeWindow::hour_at(date, hour) else {
        debug!("Skipping invalid slot {} {}:00", date, hour);
        return Vec::new();
    };

    if window.start < ctx.now {
        return Vec::new();
    }

    let Some(participants) = select_participants(ctx.users, &window, ctx.events, rng) else {
        debug!("No participants free for {}", window.start);
        return Vec::new();
    };

    let label = date_label(date, ctx.now.date());
    let alternatives = find_room_alternatives(&window, ctx.events, &ctx.config.rooms);

    alternatives
        .into_iter()
        .take(ctx.config.alternatives_per_slot)
        .map(|alternative| {
            let subject = generate_subject(
                &SubjectContext {
                    window: &window,
                    room: &alternative.room,
                    participants: &participants,
                    history: ctx.events,
                    now: ctx.now,
                    history_days: ctx.config.history_days,
                    operator_name: ctx.config.operator_name.as_deref(),
                },
                rng,
            );

            SuggestionCandidate {
                window,
                room: alternative.room,
                meeting_kind: alternative.meeting_kind,
                participants: participants.clone(),
                subject,
                date_label: label.clone(),
                priority: alternative.priority,
            }
        })
        .collect()
}

/// Every raw candidate in the horizon, today first, hour by hour
///
/// The whole horizon is always scanned. Candidates repeating a key already
/// seen in this run are dropped.
pub fn scan_horizon<R: Rng + ?Sized>(ctx: &ScanContext<'_>, rng: &mut R) -> Vec<SuggestionCandidate> {
    let hours = ctx.config.slot_hours();
    if ctx.config.horizon_days == 0
        || ctx.config.horizon_days > MAX_HORIZON_DAYS
        || hours.is_empty()
    {
        debug!(
            "Empty suggestion horizon: {} days, hours {:?}",
            ctx.config.horizon_days, hours
        );
        return Vec::new();
    }

    let today = ctx.now.date();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for offset in 0..ctx.config.horizon_days {
        let Some(date) = today.checked_add_signed(Duration::days(i64::from(offset))) else {
            continue;
        };

        for hour in hours.clone() {
            for candidate in generate_slot_candidates(date, hour, ctx, rng) {
                if seen.insert(candidate.key()) {
                    candidates.push(candidate);
                }
            }
        }
    }

    debug!("Horizon scan produced {} raw candidates", candidates.len());
    candidates
}
