//! Merge of slot batches on creation
//!
//! New slots sharing category and effective date collapse into one slot
//! spanning the whole group, with the summed capacity. Runs once per batch;
//! later edits never re-merge.

use chrono::NaiveDate;

use crate::models::NewTimeSlot;

const NAME_SEPARATOR: &str = " / ";

/// Merge a batch of new slots for an event starting on `event_date`.
///
/// Groups keep the order of their first member.
pub fn merge_new_slots(event_date: NaiveDate, slots: Vec<NewTimeSlot>) -> Vec<NewTimeSlot> {
    let mut groups: Vec<((String, NaiveDate), Vec<NewTimeSlot>)> = Vec::new();

    for slot in slots {
        let key = (slot.category.clone(), slot.effective_date(event_date));
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(slot),
            None => groups.push((key, vec![slot])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(_, members)| merge_group(members))
        .collect()
}

fn merge_group(members: Vec<NewTimeSlot>) -> Option<NewTimeSlot> {
    let mut iter = members.into_iter();
    let mut merged = iter.next()?;
    let mut names = vec![merged.name.clone()];

    for slot in iter {
        if !names.contains(&slot.name) {
            names.push(slot.name);
        }
        merged.time_from = merged.time_from.min(slot.time_from);
        merged.time_to = merged.time_to.max(slot.time_to);
        merged.max_participants = merged.max_participants.saturating_add(slot.max_participants);
        if merged.date.is_none() {
            merged.date = slot.date;
        }
    }

    merged.name = names.join(NAME_SEPARATOR);
    Some(merged)
}
