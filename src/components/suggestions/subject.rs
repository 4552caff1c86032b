use crate::components::availability::Room;
use crate::components::calendar::{CalendarEvent, TimeWindow};
use crate::utils::time::TimeOfDay;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rust_i18n::t;

use super::models::ParticipantAssignment;

/// Inputs for naming one suggested meeting
#[derive(Debug, Clone, Copy)]
pub struct SubjectContext<'a> {
    pub window: &'a TimeWindow,
    pub room: &'a Room,
    pub participants: &'a ParticipantAssignment,
    /// Every event in the snapshot; only recent ones are consulted
    pub history: &'a [CalendarEvent],
    pub now: NaiveDateTime,
    pub history_days: i64,
    pub operator_name: Option<&'a str>,
}

impl SubjectContext<'_> {
    /// Most recent past event of the primary participant that `pick` extracts a link from
    fn recent_link<F>(&self, pick: F) -> Option<&str>
    where
        F: Fn(&CalendarEvent) -> Option<&str>,
    {
        let since = Duration::try_days(self.history_days.max(0))
            .and_then(|days| self.now.checked_sub_signed(days))?;
        let primary = self.participants.primary.name.as_str();

        self.history
            .iter()
            .filter(|event| event.start >= since && event.start <= self.now)
            .filter(|event| event.involves(primary))
            .filter_map(|event| pick(event).map(|link| (event.start, link)))
            .max_by_key(|(start, _)| *start)
            .map(|(_, link)| link)
    }
}

/// Generate a meeting title
///
/// Recent opportunity work wins over recent client work, which wins over a
/// commercial meeting with two people. Otherwise the subject names the room,
/// or a random generic title for the catch-all location, with a time-of-day
/// qualifier and the operator's name.
pub fn generate_subject<R: Rng + ?Sized>(ctx: &SubjectContext<'_>, rng: &mut R) -> String {
    let primary = ctx.participants.primary.name.as_str();

    if let Some(opportunity) = ctx.recent_link(|event| event.opportunity.as_deref()) {
        return t!("subject_opportunity", opportunity = opportunity, name = primary).to_string();
    }

    if let Some(client) = ctx.recent_link(|event| event.client.as_deref()) {
        return t!("subject_client", client = client, name = primary).to_string();
    }

    if ctx.participants.secondary.is_some() {
        return t!("subject_commercial", name = primary).to_string();
    }

    let base = if ctx.room.is_catch_all {
        match rng.random_range(0..4) {
            0 => t!("subject_generic_sync"),
            1 => t!("subject_generic_review"),
            2 => t!("subject_generic_planning"),
            _ => t!("subject_generic_checkin"),
        }
        .to_string()
    } else if ctx.room.is_virtual {
        t!("subject_virtual").to_string()
    } else {
        t!("subject_room", room = ctx.room.label.as_str()).to_string()
    };

    let qualifier = TimeOfDay::of(&ctx.window.start).label();
    match ctx.operator_name.filter(|name| !name.trim().is_empty()) {
        Some(operator) => format!("{} ({}) - {}", base, qualifier, operator),
        None => format!("{} ({})", base, qualifier),
    }
}
