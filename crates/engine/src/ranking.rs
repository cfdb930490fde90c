//! Hot list ordering.
//!
//! Events without a purchase are ordered by score, highest first. Events with
//! a purchased rank are then inserted, lowest rank first, at position
//! `purchased_rank - 1`. A rank that points past the end of the list so far is
//! appended instead, so the result never has gaps.

use serde::{Deserialize, Serialize};

use crate::Event;

/// An event together with its position in the merged hot list (1-based).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEvent {
    pub rank: usize,
    pub event: Event,
}

/// Merge vote-ordered and purchase-ranked events into the final hot list.
///
/// `events` is expected in insertion order: equal scores keep that order.
/// The persisted `purchased_rank` of each event is left untouched, the
/// position is reported in [`RankedEvent::rank`].
pub fn merge(events: Vec<Event>) -> Vec<RankedEvent> {
    let (mut ranked, mut merged): (Vec<Event>, Vec<Event>) =
        events.into_iter().partition(Event::is_ranked);

    // `sort_by` is stable.
    merged.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.sort_by_key(|event| event.purchased_rank);

    for event in ranked {
        let index = usize::try_from(event.purchased_rank - 1).unwrap_or_default();
        if index < merged.len() {
            merged.insert(index, event);
        } else {
            merged.push(event);
        }
    }

    merged
        .into_iter()
        .enumerate()
        .map(|(position, event)| RankedEvent {
            rank: position + 1,
            event,
        })
        .collect()
}
