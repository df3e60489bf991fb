//! Find the slots in a day where a meeting fits.
//!
//! Starts from the whole day and subtracts the time range of every event that
//! involves a relevant attendee. Required attendees are carved first; optional
//! attendees are then carved from what remains. If the optional pass leaves
//! nothing and the meeting has required attendees, the required-only slots are
//! returned instead.
//!
//! Each narrowing step rebuilds the slot list from the previous one rather
//! than editing it in place, so a slot removed by one event can never be
//! brought back by a later one.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::event::Event;
use crate::range::TimeRange;
use crate::request::MeetingRequest;

/// Find every time range in the day that can host the requested meeting.
///
/// Returned ranges are disjoint, sorted by start, and at least
/// `request.duration` minutes long. Every required attendee is free
/// throughout each one. Optional attendees are free too, unless no slot
/// could satisfy them, in which case they are ignored, provided there is at
/// least one required attendee. With no required attendees there is nothing
/// to fall back to and the optional-attendee result stands, even when empty.
pub fn find_meeting_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let slots = narrow(events, vec![TimeRange::WHOLE_DAY], &request.attendees);
    let required_only = drop_short_slots(slots, request.duration);
    debug!(
        slots = required_only.len(),
        attendees = request.attendees.len(),
        "narrowed for required attendees"
    );

    let slots = narrow(events, required_only.clone(), &request.optional_attendees);
    let with_optional = drop_short_slots(slots, request.duration);
    debug!(
        slots = with_optional.len(),
        optional = request.optional_attendees.len(),
        "narrowed for optional attendees"
    );

    if with_optional.is_empty() && !request.attendees.is_empty() {
        debug!("no slot fits optional attendees, falling back to required only");
        return required_only;
    }
    with_optional
}

/// Subtract the time of every event attended by anyone in `attendees` from
/// `slots`.
///
/// Events are applied one at a time, each against the slot list produced by
/// the previous one. Slot order is preserved.
pub fn narrow(
    events: &[Event],
    slots: Vec<TimeRange>,
    attendees: &BTreeSet<String>,
) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .fold(slots, |slots, event| {
            trace!(title = %event.title, when = %event.when, "subtracting event");
            slots
                .into_iter()
                .flat_map(|slot| subtract(slot, &event.when).into_iter().flatten())
                .collect()
        })
}

/// Remove slots shorter than `duration` minutes.
pub fn drop_short_slots(slots: Vec<TimeRange>, duration: u32) -> Vec<TimeRange> {
    slots
        .into_iter()
        .filter(|slot| slot.duration() >= duration)
        .collect()
}

/// What is left of `slot` once `busy` is taken out: nothing, one piece, or
/// the two pieces on either side.
fn subtract(slot: TimeRange, busy: &TimeRange) -> [Option<TimeRange>; 2] {
    if busy.contains(&slot) {
        // Covers the equal case too.
        return [None, None];
    }

    if slot.contains(busy) {
        // |----slot----|
        //    |busy|
        // |-1-|    |-2-|
        return [
            piece(slot.start(), busy.start()),
            piece(busy.end(), slot.end()),
        ];
    }

    if slot.overlaps(busy) {
        // Partial overlap: starts differ, otherwise one would contain the other.
        let rest = if TimeRange::order_by_start(&slot, busy).is_lt() {
            piece(slot.start(), busy.start())
        } else {
            piece(busy.end(), slot.end())
        };
        return [rest, None];
    }

    [Some(slot), None]
}

/// A sub-slot `[start, end)`, or `None` if it would have zero width.
fn piece(start: u32, end: u32) -> Option<TimeRange> {
    (start < end).then(|| TimeRange::new_unchecked(start, end))
}
