//! Sample data for demos and local development

use super::{Repository, Stores};
use crate::{
    error::AppResult,
    models::{
        person::DEFAULT_EMAIL_DOMAIN, CreateEvent, CreatePerson, CreateTimeSlot, CreateTimeSpan,
        EventStatus, Participation, ParticipationStatus, Person, PersonId,
    },
    tracking::merge_new_slots,
};

const SAMPLE_PERSONS: &[(&str, &str, &str)] = &[
    ("Maria", "Weber", "maria.weber"),
    ("Stefan", "Müller", "stefan.mueller"),
    ("Anna", "Schmidt", "anna.schmidt"),
    ("Thomas", "Fischer", "thomas.fischer"),
    ("Lisa", "Wagner", "lisa.wagner"),
    ("Michael", "Bauer", "michael.bauer"),
    ("Sarah", "Hoffmann", "sarah.hoffmann"),
    ("Daniel", "Richter", "daniel.richter"),
];

/// (person index, [(from, to, description)])
type LoggedWork = (usize, &'static [(&'static str, &'static str, &'static str)]);

struct SampleEvent {
    name: &'static str,
    description: &'static str,
    date: &'static str,
    time_from: &'static str,
    time_to: &'static str,
    location: &'static str,
    work: &'static [LoggedWork],
}

const SAMPLE_EVENTS: &[SampleEvent] = &[
    SampleEvent {
        name: "Sommerfest",
        description: "Jährliches Vereinsfest mit Bewirtung, Ponyreiten für Kinder und geselligem Beisammensein",
        date: "2024-06-20",
        time_from: "12:00",
        time_to: "22:00",
        location: "Festplatz bei der Reithalle",
        work: &[
            (0, &[
                ("06:00", "10:00", "Zelte aufgebaut und Dekoration angebracht"),
                ("14:00", "18:00", "Gästebetreuung und Festorganisation"),
                ("20:00", "22:00", "Aufräumarbeiten und Abbau"),
            ]),
            (1, &[
                ("07:00", "11:00", "Grillstation vorbereitet und Getränke organisiert"),
                ("15:00", "19:00", "Bewirtung der Gäste"),
            ]),
            (3, &[("12:00", "20:00", "Festleitung und Koordination")]),
            (4, &[("13:00", "17:00", "Kinderbetreuung und Ponyreiten organisiert")]),
        ],
    },
    SampleEvent {
        name: "Aufbau Reitplatz",
        description: "Vorbereitung des Reitplatzes für das kommende Turnier mit Hindernisaufbau und Platzvorbereitung",
        date: "2024-12-15",
        time_from: "08:00",
        time_to: "12:00",
        location: "Reitanlage RK Schmalegg",
        work: &[
            (0, &[("08:00", "12:00", "Hindernisse aufgebaut und Platz vorbereitet")]),
            (1, &[("08:30", "11:30", "Absperrungen gesetzt und Boden geebnet")]),
            (2, &[("09:00", "12:00", "Equipment sortiert und Richterstand aufgebaut")]),
        ],
    },
];

fn person_id(persons: &[PersonId], index: usize) -> PersonId {
    persons.get(index).copied().unwrap_or_default()
}

impl Repository {
    /// Fill empty stores with the sample club data
    pub async fn seed_sample_data(&self) -> AppResult<()> {
        let mut stores = self.write().await;
        if !stores.persons.all().is_empty() || !stores.events.all().is_empty() {
            tracing::info!("Stores not empty, skipping sample data");
            return Ok(());
        }

        let persons = self.seed_persons(&mut stores)?;
        self.seed_tracked_events(&mut stores, &persons)?;
        self.seed_tournament(&mut stores, &persons)?;

        tracing::info!(
            "Seeded {} persons and {} events",
            stores.persons.all().len(),
            stores.events.all().len()
        );
        Ok(())
    }

    fn seed_persons(&self, stores: &mut Stores) -> AppResult<Vec<PersonId>> {
        let mut ids = Vec::with_capacity(SAMPLE_PERSONS.len());
        for (first_name, last_name, mailbox) in SAMPLE_PERSONS {
            let person = Person::new(
                self.next_id(),
                CreatePerson {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    email: Some(format!("{}@{}", mailbox, DEFAULT_EMAIL_DOMAIN)),
                    ..Default::default()
                },
            )?;
            ids.push(person.id);
            stores.persons.insert(person);
        }
        Ok(ids)
    }

    /// Events tracking hours per event-level participation
    fn seed_tracked_events(&self, stores: &mut Stores, persons: &[PersonId]) -> AppResult<()> {
        for sample in SAMPLE_EVENTS {
            let mut event = CreateEvent {
                name: sample.name.to_string(),
                description: Some(sample.description.to_string()),
                date_from: sample.date.to_string(),
                date_to: Some(sample.date.to_string()),
                time_from: Some(sample.time_from.to_string()),
                time_to: Some(sample.time_to.to_string()),
                location: Some(sample.location.to_string()),
                status: Some(EventStatus::Published.to_string()),
                time_slots: Vec::new(),
            }
            .into_event(self.next_id())?;

            for (index, spans) in sample.work {
                let mut participation = Participation::with_status(
                    person_id(persons, *index),
                    ParticipationStatus::Accepted,
                );
                for (from, to, description) in spans.iter() {
                    participation.time_spans.push(
                        CreateTimeSpan {
                            date: sample.date.to_string(),
                            time_from: from.to_string(),
                            time_to: to.to_string(),
                            description: Some(description.to_string()),
                        }
                        .into_time_span()?,
                    );
                }
                event.participations.push(participation);
            }
            stores.events.insert(event);
        }
        Ok(())
    }

    /// Event organised in capacity-limited time slots
    fn seed_tournament(&self, stores: &mut Stores, persons: &[PersonId]) -> AppResult<()> {
        let mut event = CreateEvent {
            name: "Reitturnier Frühjahr".to_string(),
            description: Some(
                "Traditionelles Frühjahrsturnier mit Dressur- und Springprüfungen für alle Altersklassen"
                    .to_string(),
            ),
            date_from: "2025-01-12".to_string(),
            date_to: Some("2025-01-12".to_string()),
            time_from: Some("08:00".to_string()),
            time_to: Some("18:00".to_string()),
            location: Some("Reitplatz und Reithalle".to_string()),
            status: Some(EventStatus::Draft.to_string()),
            time_slots: Vec::new(),
        }
        .into_event(self.next_id())?;

        let slots = [
            ("Parcours aufbauen", "Parcour", "06:00", "08:00", 3),
            ("Meldestelle", "Meldestelle", "07:00", "12:00", 2),
            ("Meldestelle", "Meldestelle", "12:00", "17:00", 2),
            ("Aufräumen", "Putzen", "17:00", "19:00", 4),
        ]
        .into_iter()
        .map(|(name, category, from, to, max)| {
            CreateTimeSlot {
                name: name.to_string(),
                category: category.to_string(),
                date: None,
                time_from: from.to_string(),
                time_to: to.to_string(),
                max_participants: max,
            }
            .parse()
        })
        .collect::<AppResult<Vec<_>>>()?;

        for new_slot in merge_new_slots(event.date_from, slots) {
            event.time_slots.push(new_slot.into_time_slot(self.next_id()));
        }

        if let Some(parcour) = event.time_slots.first_mut() {
            for index in [0, 1, 3] {
                parcour.participations.push(Participation::with_status(
                    person_id(persons, index),
                    ParticipationStatus::Accepted,
                ));
            }
            parcour
                .participations
                .push(Participation::new(person_id(persons, 2)));
        }

        stores.events.insert(event);
        Ok(())
    }
}
