//! Worked-hours aggregation
//!
//! Totals are re-derived from the participation records on every call.

use chrono::{Datelike, NaiveDate};

use super::{participation::BookableUnit, time_span::round_hours};
use crate::models::{Event, Participation, Person, PersonHours, PersonId};

/// Hours credited to one participation on `unit`.
///
/// Only accepted participations count. Logged time spans take precedence;
/// without any, the unit's booked hours (a slot's planned length) apply.
pub fn credited_hours<U: BookableUnit + ?Sized>(unit: &U, participation: &Participation) -> f64 {
    if !participation.is_accepted() {
        return 0.0;
    }
    if participation.time_spans.is_empty() {
        unit.booked_hours().unwrap_or(0.0)
    } else {
        participation.logged_hours()
    }
}

fn in_year(date: NaiveDate, year: Option<i32>) -> bool {
    year.map_or(true, |y| date.year() == y)
}

/// Unrounded accepted hours of `person_id` across `events`
pub fn accepted_hours<'a, I>(events: I, person_id: PersonId, year: Option<i32>) -> f64
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut hours = 0.0;
    for event in events {
        if in_year(event.date_from, year) {
            if let Some(p) = event.participation(person_id) {
                hours += credited_hours(event, p);
            }
        }
        for slot in &event.time_slots {
            if !in_year(slot.effective_date(event.date_from), year) {
                continue;
            }
            if let Some(p) = slot.participation(person_id) {
                hours += credited_hours(slot, p);
            }
        }
    }
    hours
}

/// Total and approved hours of a person.
///
/// Manual hours are undated and only join the total when no year is given.
pub fn person_hours<'a, I>(events: I, person: &Person, year: Option<i32>) -> PersonHours
where
    I: IntoIterator<Item = &'a Event>,
{
    let accepted = accepted_hours(events, person.id, year);
    let total = match year {
        Some(_) => accepted,
        None => accepted + person.manual_hours,
    };

    PersonHours {
        total_hours: round_hours(total),
        approved_hours: round_hours(accepted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EventStatus, ParticipationStatus::{Accepted, Declined, Pending}, TimeSlot, TimeSpan,
    };
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn person(manual_hours: f64) -> Person {
        Person {
            id: 1,
            first_name: "Maria".into(),
            last_name: "Weber".into(),
            email: None,
            phone: None,
            manual_hours,
        }
    }

    fn span(date: NaiveDate, from: NaiveTime, to: NaiveTime) -> TimeSpan {
        TimeSpan {
            date,
            time_from: from,
            time_to: to,
            description: String::new(),
        }
    }

    fn event(id: i64, date: NaiveDate) -> Event {
        Event {
            id,
            name: format!("Event {}", id),
            description: None,
            date_from: date,
            date_to: None,
            time_from: None,
            time_to: None,
            location: None,
            status: EventStatus::Published,
            participations: Vec::new(),
            time_slots: Vec::new(),
        }
    }

    fn slot(id: i64, date: Option<NaiveDate>, from: NaiveTime, to: NaiveTime) -> TimeSlot {
        TimeSlot {
            id,
            name: format!("Slot {}", id),
            category: String::new(),
            date,
            time_from: from,
            time_to: to,
            max_participants: 5,
            participations: Vec::new(),
        }
    }

    #[test]
    fn test_event_time_spans_sum() {
        let date = d(2024, 6, 20);
        let mut e = event(1, date);
        let mut p = Participation::with_status(1, Accepted);
        p.time_spans.push(span(date, t(8, 0), t(12, 0)));
        p.time_spans.push(span(date, t(13, 0), t(15, 30)));
        e.participations.push(p);

        let hours = person_hours([&e], &person(0.0), None);
        assert_eq!(hours.total_hours, 6.5);
        assert_eq!(hours.approved_hours, 6.5);
    }

    #[test]
    fn test_manual_hours_only_without_year() {
        let p = person(10.0);
        let events: Vec<Event> = Vec::new();
        assert_eq!(person_hours(&events, &p, None).total_hours, 10.0);
        assert_eq!(person_hours(&events, &p, Some(2024)).total_hours, 0.0);
        assert_eq!(person_hours(&events, &p, None).approved_hours, 0.0);
    }

    #[test]
    fn test_negative_span_contributes_zero() {
        let date = d(2024, 3, 15);
        let mut e = event(1, date);
        let mut p = Participation::with_status(1, Accepted);
        p.time_spans.push(span(date, t(14, 0), t(10, 0)));
        p.time_spans.push(span(date, t(8, 0), t(9, 0)));
        e.participations.push(p);

        assert_eq!(person_hours([&e], &person(0.0), None).total_hours, 1.0);
    }

    #[test]
    fn test_only_accepted_counts() {
        let date = d(2024, 3, 15);
        let mut e = event(1, date);
        let mut s = slot(2, None, t(8, 0), t(10, 0));
        s.participations.push(Participation::with_status(1, Pending));
        s.participations.push(Participation::with_status(2, Accepted));
        e.time_slots.push(s);
        e.participations.push(Participation::with_status(1, Declined));

        assert_eq!(person_hours([&e], &person(0.0), None).total_hours, 0.0);
    }

    #[test]
    fn test_slot_planned_hours_and_logged_override() {
        let date = d(2025, 1, 12);
        let mut e = event(1, date);

        let mut booked = slot(2, None, t(8, 0), t(10, 0));
        booked.participations.push(Participation::with_status(1, Accepted));

        let mut logged = slot(3, None, t(12, 0), t(16, 0));
        let mut p = Participation::with_status(1, Accepted);
        p.time_spans.push(span(date, t(12, 0), t(13, 15)));
        logged.participations.push(p);

        e.time_slots.push(booked);
        e.time_slots.push(logged);

        let hours = person_hours([&e], &person(0.0), None);
        assert_eq!(hours.approved_hours, 3.3);
    }

    #[test]
    fn test_year_filter_uses_unit_dates() {
        let mut e = event(1, d(2024, 12, 31));
        e.participations.push(Participation {
            person_id: 1,
            status: Accepted,
            time_spans: vec![span(d(2024, 12, 31), t(8, 0), t(12, 0))],
        });
        let mut s = slot(2, Some(d(2025, 1, 1)), t(10, 0), t(11, 0));
        s.participations.push(Participation::with_status(1, Accepted));
        e.time_slots.push(s);

        let p = person(3.0);
        assert_eq!(person_hours([&e], &p, Some(2024)).total_hours, 4.0);
        assert_eq!(person_hours([&e], &p, Some(2025)).total_hours, 1.0);
        assert_eq!(person_hours([&e], &p, None).total_hours, 8.0);
    }

    #[test]
    fn test_recomputes_after_change() {
        let date = d(2024, 6, 20);
        let mut e = event(1, date);
        e.participations.push(Participation {
            person_id: 1,
            status: Accepted,
            time_spans: vec![span(date, t(6, 0), t(10, 0))],
        });
        let p = person(0.0);
        assert_eq!(person_hours([&e], &p, None).total_hours, 4.0);

        e.participations[0].status = Declined;
        assert_eq!(person_hours([&e], &p, None).total_hours, 0.0);
    }
}
