use crate::components::availability::is_participant_available;
use crate::components::calendar::{CalendarEvent, TimeWindow, User};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::models::ParticipantAssignment;

/// Pick up to three free people for a window
///
/// The free users are shuffled so repeated runs spread suggestions across
/// the team. Returns `None` when nobody is free. A name is never assigned
/// to two roles.
pub fn select_participants<R: Rng + ?Sized>(
    pool: &[User],
    window: &TimeWindow,
    events: &[CalendarEvent],
    rng: &mut R,
) -> Option<ParticipantAssignment> {
    let mut seen = HashSet::new();
    let mut available: Vec<&User> = pool
        .iter()
        .filter(|user| user.active && !user.name.trim().is_empty())
        .filter(|user| is_participant_available(user, window, events))
        .filter(|user| seen.insert(user.name.as_str()))
        .collect();

    available.shuffle(rng);

    let mut picked = available.into_iter().cloned();
    let primary = picked.next()?;

    Some(ParticipantAssignment {
        primary,
        secondary: picked.next(),
        tertiary: picked.next(),
    })
}
