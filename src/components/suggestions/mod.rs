//! Meeting slot suggestions.
//!
//! A run scans the configured horizon hour by hour, turns each free slot
//! into at most a couple of candidates and keeps the best candidate per
//! start time. Everything here is synchronous and works on a snapshot
//! handed in by the caller.

pub mod generator;
pub mod models;
pub mod participants;
pub mod ranking;
pub mod subject;

pub use generator::{generate_slot_candidates, scan_horizon, ScanContext};
pub use models::{ParticipantAssignment, SuggestionCandidate};
pub use participants::select_participants;
pub use ranking::rank_candidates;
pub use subject::{generate_subject, SubjectContext};

use crate::components::calendar::{CalendarEvent, User};
use crate::config::SuggestionConfig;
use chrono::NaiveDateTime;
use rand::Rng;
use tracing::debug;

/// Suggest the next open meetings, using the thread-local random source
pub fn generate_suggestions(
    events: &[CalendarEvent],
    users: &[User],
    now: NaiveDateTime,
    config: &SuggestionConfig,
) -> Vec<SuggestionCandidate> {
    generate_suggestions_with_rng(events, users, now, config, &mut rand::rng())
}

/// Suggest the next open meetings with an injected random source
///
/// Randomness only picks participants and generic subjects. Slot choice and
/// ranking do not depend on it.
pub fn generate_suggestions_with_rng<R: Rng + ?Sized>(
    events: &[CalendarEvent],
    users: &[User],
    now: NaiveDateTime,
    config: &SuggestionConfig,
    rng: &mut R,
) -> Vec<SuggestionCandidate> {
    let ctx = ScanContext {
        events,
        users,
        now,
        config,
    };

    let raw = scan_horizon(&ctx, rng);
    let suggestions = rank_candidates(raw, config.max_suggestions);
    debug!("Returning {} suggestions", suggestions.len());
    suggestions
}
